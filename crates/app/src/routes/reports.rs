use clinic_api::ApiClient;
use dioxus::prelude::*;
use dioxus_primitives::toast::{use_toast, ToastOptions};
use shared_types::ReportData;

use crate::components::StatCard;

pub const REPORT_FETCH_FAILED: &str = "Failed to fetch report data.";

const REPORT_KINDS: [&str; 3] = ["Exams", "ASO", "Risks"];

/// Reports & statistics. All five datasets load together; if any request
/// fails nothing is shown and a single error toast is raised.
#[component]
pub fn Reports() -> Element {
    let api = use_context::<ApiClient>();
    let toast = use_toast();

    let data = use_resource(move || {
        let api = api.clone();
        async move {
            match api.load_report().await {
                Ok(report) => Some(report),
                Err(e) => {
                    tracing::error!(error = %e, "Report data unavailable");
                    toast.error(REPORT_FETCH_FAILED.to_string(), ToastOptions::new());
                    None
                }
            }
        }
    });

    rsx! {
        div { class: "card",
            div { class: "navbar",
                h2 { "Reports & Statistics" }
                div {
                    for kind in REPORT_KINDS {
                        button {
                            key: "{kind}",
                            class: "button button-secondary",
                            onclick: move |_| {
                                toast.success(
                                    format!("{kind} report generated successfully!"),
                                    ToastOptions::new(),
                                );
                            },
                            "{kind} report"
                        }
                    }
                }
            }
        }

        match &*data.read() {
            Some(Some(report)) => rsx! {
                ReportBody { report: report.clone() }
            },
            Some(None) => rsx! {
                div { class: "card", p { "{REPORT_FETCH_FAILED}" } }
            },
            None => rsx! {
                div { class: "auth-guard-loading", p { "Loading report data..." } }
            },
        }
    }
}

#[component]
fn ReportBody(report: ReportData) -> Element {
    let summary = report.summary();

    rsx! {
        div { class: "card-grid",
            StatCard { title: "Total Employees", value: "{summary.total_employees}" }
            StatCard { title: "Exams This Period", value: "{summary.exams_total}" }
            StatCard { title: "Active Risks", value: "{summary.active_risks}" }
            StatCard { title: "ASOs Issued", value: "{summary.asos_issued}" }
        }

        div { class: "card",
            h3 { "Exams by month" }
            table { class: "data-table",
                thead {
                    tr {
                        th { "Month" }
                        th { "Admission" }
                        th { "Periodic" }
                        th { "Return to work" }
                        th { "Dismissal" }
                        th { "Total" }
                    }
                }
                tbody {
                    for row in report.exams_by_month.iter() {
                        tr { key: "{row.month}",
                            td { "{row.month}" }
                            td { "{row.admission}" }
                            td { "{row.periodic}" }
                            td { "{row.return_to_work}" }
                            td { "{row.dismissal}" }
                            td { "{row.total()}" }
                        }
                    }
                }
            }
        }

        div { class: "card",
            h3 { "ASO trend" }
            table { class: "data-table",
                thead {
                    tr {
                        th { "Month" }
                        th { "Complete" }
                        th { "Issued" }
                        th { "Pending" }
                    }
                }
                tbody {
                    for row in report.aso_trend.iter() {
                        tr { key: "{row.month}",
                            td { "{row.month}" }
                            td { "{row.complete}" }
                            td { "{row.issued}" }
                            td { "{row.pending}" }
                        }
                    }
                }
            }
        }

        div { class: "card",
            h3 { "Risks by category" }
            table { class: "data-table",
                thead {
                    tr {
                        th { "Category" }
                        th { "Count" }
                        th { "Share" }
                    }
                }
                tbody {
                    for row in report.risks_by_category.iter() {
                        tr { key: "{row.category}",
                            td { "{row.category}" }
                            td { "{row.count}" }
                            td { "{row.percentage:.1}%" }
                        }
                    }
                }
            }
        }

        div { class: "card",
            h3 { "Fitness results" }
            table { class: "data-table",
                thead {
                    tr {
                        th { "Month" }
                        th { "Fit" }
                        th { "Fit with restrictions" }
                        th { "Unfit" }
                    }
                }
                tbody {
                    for row in report.fitness_trend.iter() {
                        tr { key: "{row.month}",
                            td { "{row.month}" }
                            td { "{row.fit}" }
                            td { "{row.fit_with_restrictions}" }
                            td { "{row.unfit}" }
                        }
                    }
                }
            }
        }

        div { class: "card",
            h3 { "Companies" }
            table { class: "data-table",
                thead {
                    tr {
                        th { "Company" }
                        th { "Employees" }
                    }
                }
                tbody {
                    for company in report.companies.iter() {
                        tr { key: "{company.id}",
                            td { "{company.name}" }
                            td { "{company.employee_count}" }
                        }
                    }
                }
            }
        }
    }
}
