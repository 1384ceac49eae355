use dioxus::prelude::*;
use shared_types::{OccupationalRisk, RiskCategory, RiskStatus, Severity};

use crate::fixtures;

fn category_label(category: RiskCategory) -> &'static str {
    match category {
        RiskCategory::Physical => "Physical",
        RiskCategory::Chemical => "Chemical",
        RiskCategory::Biological => "Biological",
        RiskCategory::Ergonomic => "Ergonomic",
        RiskCategory::Accident => "Accident",
    }
}

fn severity_class(severity: Severity) -> &'static str {
    match severity {
        Severity::High | Severity::Critical => "badge badge-danger",
        Severity::Low | Severity::Medium => "badge",
    }
}

fn severity_label(severity: Severity) -> &'static str {
    match severity {
        Severity::Low => "Low",
        Severity::Medium => "Medium",
        Severity::High => "High",
        Severity::Critical => "Critical",
    }
}

fn companies_label(risk: &OccupationalRisk) -> String {
    risk.companies.join(", ")
}

fn status_label(status: RiskStatus) -> &'static str {
    match status {
        RiskStatus::Active => "Active",
        RiskStatus::Controlled => "Controlled",
        RiskStatus::Eliminated => "Eliminated",
    }
}

/// Hazard register, most severe first.
#[component]
pub fn Risks() -> Element {
    let risks = use_signal(fixtures::occupational_risks);
    let mut attention_only = use_signal(|| false);

    let mut visible: Vec<OccupationalRisk> = risks
        .read()
        .iter()
        .filter(|risk| !attention_only() || risk.needs_attention())
        .cloned()
        .collect();
    visible.sort_by(|a, b| b.severity.cmp(&a.severity));

    rsx! {
        div { class: "card",
            div { class: "navbar",
                h2 { "Occupational Risks" }
                label {
                    input {
                        r#type: "checkbox",
                        checked: attention_only(),
                        onchange: move |_| attention_only.set(!attention_only()),
                    }
                    " Needs attention only"
                }
            }
        }

        div { class: "card",
            table { class: "data-table",
                thead {
                    tr {
                        th { "Risk" }
                        th { "Category" }
                        th { "Severity" }
                        th { "Companies" }
                        th { "Preventive measures" }
                        th { "Next assessment" }
                        th { "Status" }
                    }
                }
                tbody {
                    for risk in visible {
                        tr { key: "{risk.id}",
                            td { "{risk.name}" }
                            td { "{category_label(risk.category)}" }
                            td { span { class: severity_class(risk.severity), "{severity_label(risk.severity)}" } }
                            td { "{companies_label(&risk)}" }
                            td { "{risk.preventive_measures}" }
                            td { "{risk.next_assessment}" }
                            td { "{status_label(risk.status)}" }
                        }
                    }
                }
            }
        }
    }
}
