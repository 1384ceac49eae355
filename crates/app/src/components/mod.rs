use dioxus::prelude::*;
use shared_types::RecordStatus;
use std::collections::HashMap;

/// Labelled text input with an optional validation message underneath.
#[component]
pub fn FormField(
    label: String,
    value: String,
    on_input: EventHandler<FormEvent>,
    error: Option<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
) -> Element {
    rsx! {
        div { class: "field",
            label { "{label}" }
            input {
                r#type: "{input_type}",
                value: "{value}",
                placeholder: "{placeholder}",
                oninput: move |evt| on_input.call(evt),
            }
            if let Some(msg) = error {
                span { class: "field-error", "{msg}" }
            }
        }
    }
}

#[component]
pub fn StatusBadge(status: RecordStatus) -> Element {
    let class = if status.is_active() { "badge badge-active" } else { "badge" };
    rsx! {
        span { class, "{status.as_str()}" }
    }
}

/// Summary figure card used by the dashboard and reports.
#[component]
pub fn StatCard(title: String, value: String, #[props(default)] hint: String) -> Element {
    rsx! {
        div { class: "card",
            p { "{title}" }
            p { class: "stat-value", "{value}" }
            if !hint.is_empty() {
                p { class: "auth-hint", "{hint}" }
            }
        }
    }
}

/// Field error for `name`, cloned out of the error map.
pub fn field_error(errors: &Signal<HashMap<String, String>>, name: &str) -> Option<String> {
    errors.read().get(name).cloned()
}
