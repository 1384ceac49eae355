use clinic_api::auth::DEMO_PASSWORD;
use dioxus::prelude::*;

use crate::auth::use_auth;
use crate::routes::Route;

/// Email/password sign-in against the clinic user directory.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        error_msg.set(None);

        if auth.login(&email.read(), &password.read()) {
            navigator().replace(Route::Dashboard {});
        } else {
            error_msg.set(Some("Invalid email or password".to_string()));
        }
    };

    let demo_users = auth.demo_users();

    rsx! {
        div { class: "auth-page",
            div { class: "card auth-card",
                h2 { "Sign In" }
                p { "Enter your credentials to access the clinic dashboard" }

                if let Some(user) = auth.current_identity() {
                    p { class: "auth-hint",
                        "Signed in as {user.email}. "
                        Link { to: Route::Dashboard {}, "Continue to dashboard" }
                    }
                }

                if let Some(err) = error_msg() {
                    div { class: "auth-error", "{err}" }
                }

                form { onsubmit: handle_login,
                    div { class: "field",
                        label { r#for: "email", "Email" }
                        input {
                            id: "email",
                            r#type: "email",
                            value: "{email}",
                            placeholder: "you@clinic.com",
                            oninput: move |evt| email.set(evt.value()),
                        }
                    }
                    div { class: "field",
                        label { r#for: "password", "Password" }
                        input {
                            id: "password",
                            r#type: "password",
                            value: "{password}",
                            oninput: move |evt| password.set(evt.value()),
                        }
                    }
                    button { class: "button", r#type: "submit", "Sign In" }
                }

                div { class: "auth-hint",
                    p { "Demo accounts (password: {DEMO_PASSWORD})" }
                    ul {
                        for user in demo_users {
                            li { key: "{user.id}", "{user.email} ({user.role.label()})" }
                        }
                    }
                }
            }
        }
    }
}
