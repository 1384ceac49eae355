use dioxus::prelude::*;
use dioxus_primitives::toast::{use_toast, ToastOptions};
use shared_types::MedicalExam;
use std::collections::HashSet;

use crate::fixtures;

/// ASO (occupational health certificate) issuance for completed exams.
#[component]
pub fn Aso() -> Element {
    let toast = use_toast();
    let exams = use_signal(fixtures::medical_exams);
    let mut issued = use_signal(HashSet::<String>::new);

    let ready: Vec<MedicalExam> = exams
        .read()
        .iter()
        .filter(|exam| exam.ready_for_aso())
        .cloned()
        .collect();
    let waiting = exams.read().len() - ready.len();

    rsx! {
        div { class: "card",
            h2 { "ASO Issuance" }
            p { "{ready.len()} exams ready for a certificate, {waiting} still in progress or scheduled." }
        }

        div { class: "card",
            table { class: "data-table",
                thead {
                    tr {
                        th { "Employee" }
                        th { "Company" }
                        th { "Exam" }
                        th { "Result" }
                        th { "" }
                    }
                }
                tbody {
                    for exam in ready {
                        tr { key: "{exam.id}",
                            td { "{exam.employee}" }
                            td { "{exam.company}" }
                            td { "{exam.exam_type.label()} ({exam.date})" }
                            td {
                                if let Some(result) = exam.result {
                                    span { class: "badge", "{result.label()}" }
                                }
                            }
                            td {
                                if issued.read().contains(&exam.id) {
                                    span { class: "badge badge-active", "Issued" }
                                } else {
                                    button {
                                        class: "button",
                                        onclick: {
                                            let id = exam.id.clone();
                                            let employee = exam.employee.clone();
                                            move |_| {
                                                issued.write().insert(id.clone());
                                                toast.success(
                                                    format!("ASO issued for {employee}"),
                                                    ToastOptions::new(),
                                                );
                                            }
                                        },
                                        "Issue ASO"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
