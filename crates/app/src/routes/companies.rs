use clinic_api::ApiClient;
use dioxus::prelude::*;
use dioxus_primitives::toast::{use_toast, ToastOptions};
use shared_types::{AppError, Company, NewCompany, RecordStatus};
use std::collections::HashMap;
use validator::Validate;

use crate::components::{field_error, FormField, StatusBadge};

/// Parse the employee-count input. Blank means zero.
fn parse_count(raw: &str) -> Result<u32, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse::<u32>()
        .map_err(|_| "Employee count must be a whole number".to_string())
}

/// Client companies: list from the backend plus a registration form.
#[component]
pub fn Companies() -> Element {
    let api = use_context::<ApiClient>();
    let toast = use_toast();

    let mut show_form = use_signal(|| false);
    let mut form_name = use_signal(String::new);
    let mut form_cnpj = use_signal(String::new);
    let mut form_address = use_signal(String::new);
    let mut form_phone = use_signal(String::new);
    let mut form_employee_count = use_signal(String::new);
    let mut form_registration_date = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut in_flight = use_signal(|| false);

    let list_api = api.clone();
    let mut data = use_resource(move || {
        let api = list_api.clone();
        async move {
            let result = api.list_companies().await;
            if let Err(e) = &result {
                toast.error(e.friendly_message(), ToastOptions::new());
            }
            result
        }
    });

    let mut reset_form = move || {
        form_name.set(String::new());
        form_cnpj.set(String::new());
        form_address.set(String::new());
        form_phone.set(String::new());
        form_employee_count.set(String::new());
        form_registration_date.set(String::new());
        field_errors.set(HashMap::new());
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        if in_flight() {
            return;
        }

        let employee_count = match parse_count(&form_employee_count.read()) {
            Ok(count) => count,
            Err(msg) => {
                field_errors.set(HashMap::from([("employee_count".to_string(), msg)]));
                return;
            }
        };
        let payload = NewCompany {
            name: form_name().trim().to_string(),
            cnpj: form_cnpj().trim().to_string(),
            address: form_address().trim().to_string(),
            phone: form_phone().trim().to_string(),
            employee_count,
            status: RecordStatus::Active,
            registration_date: form_registration_date(),
        };
        if let Err(e) = payload.validate() {
            field_errors.set(AppError::from(e).field_errors);
            return;
        }
        field_errors.set(HashMap::new());

        let api = api.clone();
        spawn(async move {
            in_flight.set(true);
            match api.create_company(&payload).await {
                Ok(_) => {
                    data.restart();
                    show_form.set(false);
                    reset_form();
                    toast.success(
                        "Company registered successfully!".to_string(),
                        ToastOptions::new(),
                    );
                }
                Err(e) => {
                    toast.error(e.friendly_message(), ToastOptions::new());
                }
            }
            in_flight.set(false);
        });
    };

    rsx! {
        div { class: "card",
            div { class: "navbar",
                h2 { "Client Companies" }
                button {
                    class: "button",
                    onclick: move |_| show_form.set(!show_form()),
                    if show_form() { "Cancel" } else { "New Company" }
                }
            }

            if show_form() {
                form { onsubmit: handle_save,
                    div { class: "form-grid",
                        FormField {
                            label: "Company Name *",
                            value: form_name(),
                            on_input: move |e: FormEvent| form_name.set(e.value()),
                            error: field_error(&field_errors, "name"),
                        }
                        FormField {
                            label: "CNPJ *",
                            value: form_cnpj(),
                            on_input: move |e: FormEvent| form_cnpj.set(e.value()),
                            error: field_error(&field_errors, "cnpj"),
                            placeholder: "00.000.000/0000-00",
                        }
                        FormField {
                            label: "Address *",
                            value: form_address(),
                            on_input: move |e: FormEvent| form_address.set(e.value()),
                            error: field_error(&field_errors, "address"),
                        }
                        FormField {
                            label: "Phone *",
                            value: form_phone(),
                            on_input: move |e: FormEvent| form_phone.set(e.value()),
                            error: field_error(&field_errors, "phone"),
                        }
                        FormField {
                            label: "Employee Count",
                            value: form_employee_count(),
                            on_input: move |e: FormEvent| form_employee_count.set(e.value()),
                            error: field_error(&field_errors, "employee_count"),
                            input_type: "number",
                        }
                        FormField {
                            label: "Registration Date",
                            value: form_registration_date(),
                            on_input: move |e: FormEvent| form_registration_date.set(e.value()),
                            input_type: "date",
                        }
                    }
                    button {
                        class: "button",
                        r#type: "submit",
                        disabled: in_flight(),
                        "Register Company"
                    }
                }
            }
        }

        match &*data.read() {
            Some(Ok(companies)) if companies.is_empty() => rsx! {
                div { class: "card", p { "No companies registered yet." } }
            },
            Some(Ok(companies)) => rsx! {
                CompanyTable { companies: companies.clone() }
            },
            Some(Err(e)) => rsx! {
                div { class: "card", p { class: "field-error", "{e.friendly_message()}" } }
            },
            None => rsx! {
                div { class: "auth-guard-loading", p { "Loading companies..." } }
            },
        }
    }
}

#[component]
fn CompanyTable(companies: Vec<Company>) -> Element {
    rsx! {
        div { class: "card",
            table { class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "CNPJ" }
                        th { "Phone" }
                        th { "Employees" }
                        th { "Registered" }
                        th { "Status" }
                    }
                }
                tbody {
                    for company in companies {
                        tr { key: "{company.id}",
                            td { "{company.name}" }
                            td { "{company.cnpj}" }
                            td { "{company.phone}" }
                            td { "{company.employee_count}" }
                            td { "{company.registration_date}" }
                            td { StatusBadge { status: company.status } }
                        }
                    }
                }
            }
        }
    }
}
