use dioxus::prelude::*;
use shared_types::{ExamStatus, MedicalExam};

use crate::fixtures;

fn status_label(status: ExamStatus) -> &'static str {
    match status {
        ExamStatus::Scheduled => "Scheduled",
        ExamStatus::InProgress => "In Progress",
        ExamStatus::Completed => "Completed",
        ExamStatus::Cancelled => "Cancelled",
    }
}

fn result_label(exam: &MedicalExam) -> &'static str {
    exam.result.map(|r| r.label()).unwrap_or("-")
}

/// Scheduled and performed exams, filterable by status.
#[component]
pub fn Exams() -> Element {
    let exams = use_signal(fixtures::medical_exams);
    let mut status_filter = use_signal(|| Option::<ExamStatus>::None);

    let visible: Vec<MedicalExam> = exams
        .read()
        .iter()
        .filter(|exam| status_filter().map_or(true, |status| exam.status == status))
        .cloned()
        .collect();

    rsx! {
        div { class: "card",
            h2 { "Medical Exams" }
            div { class: "navbar",
                button {
                    class: if status_filter().is_none() { "button" } else { "button button-secondary" },
                    onclick: move |_| status_filter.set(None),
                    "All"
                }
                for status in [ExamStatus::Scheduled, ExamStatus::InProgress, ExamStatus::Completed] {
                    button {
                        key: "{status_label(status)}",
                        class: if status_filter() == Some(status) { "button" } else { "button button-secondary" },
                        onclick: move |_| status_filter.set(Some(status)),
                        "{status_label(status)}"
                    }
                }
            }
        }

        div { class: "card",
            table { class: "data-table",
                thead {
                    tr {
                        th { "Employee" }
                        th { "Company" }
                        th { "Type" }
                        th { "Date" }
                        th { "Doctor" }
                        th { "Status" }
                        th { "Result" }
                    }
                }
                tbody {
                    for exam in visible {
                        tr { key: "{exam.id}",
                            td { "{exam.employee}" }
                            td { "{exam.company}" }
                            td { "{exam.exam_type.label()}" }
                            td { "{exam.date} {exam.time}" }
                            td { "{exam.doctor}" }
                            td { span { class: "badge", "{status_label(exam.status)}" } }
                            td { "{result_label(&exam)}" }
                        }
                    }
                }
            }
        }
    }
}
