use dioxus::prelude::*;
use dioxus_primitives::toast::{use_toast, ToastOptions};
use shared_types::{ClinicStaff as StaffMember, RecordStatus, StaffRole};
use std::collections::HashMap;

use crate::components::{field_error, FormField, StatusBadge};
use crate::fixtures;

fn parse_staff_role(raw: &str) -> Option<StaffRole> {
    match raw {
        "doctor" => Some(StaffRole::Doctor),
        "nurse" => Some(StaffRole::Nurse),
        "technician" => Some(StaffRole::Technician),
        "administrator" => Some(StaffRole::Administrator),
        _ => None,
    }
}

/// Clinic staff registry. Access is decided by the route guard alone.
#[component]
pub fn ClinicStaff() -> Element {
    let toast = use_toast();
    let mut staff = use_signal(fixtures::clinic_staff);
    let mut search = use_signal(String::new);

    let mut show_form = use_signal(|| false);
    let mut form_name = use_signal(String::new);
    let mut form_role = use_signal(String::new);
    let mut form_registration = use_signal(String::new);
    let mut form_specialty = use_signal(String::new);
    let mut form_email = use_signal(String::new);
    let mut form_phone = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let handle_save = move |evt: FormEvent| {
        evt.prevent_default();
        let mut errors = HashMap::new();
        if form_name.read().trim().is_empty() {
            errors.insert("name".to_string(), "Name is required".to_string());
        }
        let role = parse_staff_role(&form_role.read());
        if role.is_none() {
            errors.insert("role".to_string(), "Select a role".to_string());
        }
        if form_registration.read().trim().is_empty() {
            errors.insert(
                "registration_number".to_string(),
                "Registration number is required".to_string(),
            );
        }
        let Some(role) = role.filter(|_| errors.is_empty()) else {
            field_errors.set(errors);
            return;
        };

        let specialty = form_specialty.read().trim().to_string();
        let next_id = staff.read().len() + 1;
        staff.write().push(StaffMember {
            id: next_id.to_string(),
            name: form_name().trim().to_string(),
            role,
            registration_number: form_registration().trim().to_string(),
            specialty: (!specialty.is_empty()).then_some(specialty),
            email: form_email().trim().to_string(),
            phone: form_phone().trim().to_string(),
            hire_date: String::new(),
            status: RecordStatus::Active,
        });

        field_errors.set(HashMap::new());
        form_name.set(String::new());
        form_role.set(String::new());
        form_registration.set(String::new());
        form_specialty.set(String::new());
        form_email.set(String::new());
        form_phone.set(String::new());
        show_form.set(false);
        toast.success("Staff member registered successfully!".to_string(), ToastOptions::new());
    };

    let term = search.read().clone();
    let visible: Vec<StaffMember> = staff
        .read()
        .iter()
        .filter(|member| member.matches_search(&term))
        .cloned()
        .collect();

    rsx! {
        div { class: "card",
            div { class: "navbar",
                h2 { "Clinic Staff" }
                button {
                    class: "button",
                    onclick: move |_| show_form.set(!show_form()),
                    if show_form() { "Cancel" } else { "New Staff Member" }
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
                        div { class: "field",
                            label { "Role *" }
                            select {
                                value: "{form_role}",
                                onchange: move |e| form_role.set(e.value()),
                                option { value: "", "Select..." }
                                option { value: "doctor", "Doctor" }
                                option { value: "nurse", "Nurse" }
                                option { value: "technician", "Technician" }
                                option { value: "administrator", "Administrator" }
                            }
                            if let Some(msg) = field_error(&field_errors, "role") {
                                span { class: "field-error", "{msg}" }
                            }
                        }
                        FormField {
                            label: "Registration Number *",
                            value: form_registration(),
                            on_input: move |e: FormEvent| form_registration.set(e.value()),
                            error: field_error(&field_errors, "registration_number"),
                            placeholder: "CRM-SP 123456",
                        }
                        FormField {
                            label: "Specialty",
                            value: form_specialty(),
                            on_input: move |e: FormEvent| form_specialty.set(e.value()),
                        }
                        FormField {
                            label: "Email",
                            value: form_email(),
                            on_input: move |e: FormEvent| form_email.set(e.value()),
                            input_type: "email",
                        }
                        FormField {
                            label: "Phone",
                            value: form_phone(),
                            on_input: move |e: FormEvent| form_phone.set(e.value()),
                        }
                    }
                    button { class: "button", r#type: "submit", "Register" }
                }
            }

            div { class: "field",
                input {
                    value: "{search}",
                    placeholder: "Search by name, role or registration...",
                    oninput: move |e| search.set(e.value()),
                }
            }
        }

        div { class: "card",
            if visible.is_empty() {
                p { "No staff members match the search." }
            } else {
                table { class: "data-table",
                    thead {
                        tr {
                            th { "Name" }
                            th { "Role" }
                            th { "Registration" }
                            th { "Specialty" }
                            th { "Contact" }
                            th { "Status" }
                        }
                    }
                    tbody {
                        for member in visible {
                            tr { key: "{member.id}",
                                td { "{member.name}" }
                                td { "{member.role.label()}" }
                                td { "{member.registration_number}" }
                                td { "{member.specialty.clone().unwrap_or_default()}" }
                                td { "{member.email} {member.phone}" }
                                td { StatusBadge { status: member.status } }
                            }
                        }
                    }
                }
            }
        }
    }
}
