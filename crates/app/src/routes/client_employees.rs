use clinic_api::ApiClient;
use dioxus::prelude::*;
use dioxus_primitives::toast::{use_toast, ToastOptions};
use shared_types::{AppError, Employee, NewEmployee, RecordStatus};
use std::collections::HashMap;
use validator::Validate;

use crate::components::{field_error, FormField, StatusBadge};

/// Employees of client companies.
#[component]
pub fn ClientEmployees() -> Element {
    let api = use_context::<ApiClient>();
    let toast = use_toast();

    let mut search = use_signal(String::new);
    let mut show_form = use_signal(|| false);
    let mut form_name = use_signal(String::new);
    let mut form_cpf = use_signal(String::new);
    let mut form_date_of_birth = use_signal(String::new);
    let mut form_company = use_signal(String::new);
    let mut form_position = use_signal(String::new);
    let mut form_department = use_signal(String::new);
    let mut form_admission_date = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut in_flight = use_signal(|| false);

    let list_api = api.clone();
    let mut data = use_resource(move || {
        let api = list_api.clone();
        async move {
            let result = api.list_employees().await;
            if let Err(e) = &result {
                toast.error(e.friendly_message(), ToastOptions::new());
            }
            result
        }
    });

    // Company names for the form's suggestions. A failure only loses the hints.
    let companies_api = api.clone();
    let company_names = use_resource(move || {
        let api = companies_api.clone();
        async move {
            match api.list_companies().await {
                Ok(companies) => companies.into_iter().map(|c| c.name).collect::<Vec<_>>(),
                Err(e) => {
                    tracing::warn!(error = %e, "Company suggestions unavailable");
                    Vec::new()
                }
            }
        }
    });

    let mut reset_form = move || {
        form_name.set(String::new());
        form_cpf.set(String::new());
        form_date_of_birth.set(String::new());
        form_company.set(String::new());
        form_position.set(String::new());
        form_department.set(String::new());
        form_admission_date.set(String::new());
        field_errors.set(HashMap::new());
    };

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        if in_flight() {
            return;
        }

        let payload = NewEmployee {
            name: form_name().trim().to_string(),
            cpf: form_cpf().trim().to_string(),
            date_of_birth: form_date_of_birth(),
            company: form_company().trim().to_string(),
            position: form_position().trim().to_string(),
            department: form_department().trim().to_string(),
            admission_date: form_admission_date(),
            status: RecordStatus::Active,
        };
        if let Err(e) = payload.validate() {
            field_errors.set(AppError::from(e).field_errors);
            return;
        }
        field_errors.set(HashMap::new());

        let api = api.clone();
        spawn(async move {
            in_flight.set(true);
            match api.create_employee(&payload).await {
                Ok(_) => {
                    data.restart();
                    show_form.set(false);
                    reset_form();
                    toast.success(
                        "Employee registered successfully!".to_string(),
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

    let suggestions = company_names.read().clone().unwrap_or_default();
    let term = search.read().clone();

    rsx! {
        div { class: "card",
            div { class: "navbar",
                h2 { "Client Employees" }
                button {
                    class: "button",
                    onclick: move |_| show_form.set(!show_form()),
                    if show_form() { "Cancel" } else { "New Employee" }
                }
            }

            if show_form() {
                form { onsubmit: handle_save,
                    div { class: "form-grid",
                        FormField {
                            label: "Full Name *",
                            value: form_name(),
                            on_input: move |e: FormEvent| form_name.set(e.value()),
                            error: field_error(&field_errors, "name"),
                        }
                        FormField {
                            label: "CPF *",
                            value: form_cpf(),
                            on_input: move |e: FormEvent| form_cpf.set(e.value()),
                            error: field_error(&field_errors, "cpf"),
                            placeholder: "000.000.000-00",
                        }
                        FormField {
                            label: "Date of Birth *",
                            value: form_date_of_birth(),
                            on_input: move |e: FormEvent| form_date_of_birth.set(e.value()),
                            error: field_error(&field_errors, "date_of_birth"),
                            input_type: "date",
                        }
                        div { class: "field",
                            label { "Company *" }
                            input {
                                list: "company-options",
                                value: "{form_company}",
                                oninput: move |e| form_company.set(e.value()),
                            }
                            datalist { id: "company-options",
                                for name in suggestions {
                                    option { key: "{name}", value: "{name}" }
                                }
                            }
                            if let Some(msg) = field_error(&field_errors, "company") {
                                span { class: "field-error", "{msg}" }
                            }
                        }
                        FormField {
                            label: "Position *",
                            value: form_position(),
                            on_input: move |e: FormEvent| form_position.set(e.value()),
                            error: field_error(&field_errors, "position"),
                        }
                        FormField {
                            label: "Department",
                            value: form_department(),
                            on_input: move |e: FormEvent| form_department.set(e.value()),
                        }
                        FormField {
                            label: "Admission Date *",
                            value: form_admission_date(),
                            on_input: move |e: FormEvent| form_admission_date.set(e.value()),
                            error: field_error(&field_errors, "admission_date"),
                            input_type: "date",
                        }
                    }
                    button {
                        class: "button",
                        r#type: "submit",
                        disabled: in_flight(),
                        "Register Employee"
                    }
                }
            }

            div { class: "field",
                input {
                    value: "{search}",
                    placeholder: "Search by name, company or position...",
                    oninput: move |e| search.set(e.value()),
                }
            }
        }

        match &*data.read() {
            Some(Ok(employees)) if employees.is_empty() => rsx! {
                div { class: "card", p { "No employees registered yet." } }
            },
            Some(Ok(employees)) => {
                let visible: Vec<Employee> = employees
                    .iter()
                    .filter(|employee| employee.matches_search(&term))
                    .cloned()
                    .collect();
                if visible.is_empty() {
                    rsx! {
                        div { class: "card", p { "No employees match the search." } }
                    }
                } else {
                    rsx! {
                        EmployeeTable { employees: visible }
                    }
                }
            }
            Some(Err(e)) => rsx! {
                div { class: "card", p { class: "field-error", "{e.friendly_message()}" } }
            },
            None => rsx! {
                div { class: "auth-guard-loading", p { "Loading employees..." } }
            },
        }
    }
}

#[component]
fn EmployeeTable(employees: Vec<Employee>) -> Element {
    rsx! {
        div { class: "card",
            table { class: "data-table",
                thead {
                    tr {
                        th { "Name" }
                        th { "CPF" }
                        th { "Company" }
                        th { "Position" }
                        th { "Department" }
                        th { "Admitted" }
                        th { "Status" }
                    }
                }
                tbody {
                    for employee in employees {
                        tr { key: "{employee.id}",
                            td { "{employee.name}" }
                            td { "{employee.cpf}" }
                            td { "{employee.company}" }
                            td { "{employee.position}" }
                            td { "{employee.department}" }
                            td { "{employee.admission_date}" }
                            td { StatusBadge { status: employee.status } }
                        }
                    }
                }
            }
        }
    }
}
