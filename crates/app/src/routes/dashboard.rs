use dioxus::prelude::*;
use shared_types::{count_active, View};

use crate::auth::{use_auth, use_visible_views};
use crate::components::StatCard;
use crate::fixtures;
use crate::routes::Route;

/// `/` renders the same page as `/dashboard`.
#[component]
pub fn Home() -> Element {
    rsx! { Dashboard {} }
}

/// Landing page after login: greeting, headline figures and shortcuts to the
/// views the current role can open.
#[component]
pub fn Dashboard() -> Element {
    let auth = use_auth();
    let views = use_visible_views();

    let name = auth
        .current_identity()
        .map(|user| user.name)
        .unwrap_or_default();

    let exams = fixtures::medical_exams();
    let risks = fixtures::occupational_risks();
    let staff = fixtures::clinic_staff();

    let pending_exams = exams.iter().filter(|e| !e.ready_for_aso()).count();
    let ready_for_aso = exams.len() - pending_exams;
    let high_risks = risks.iter().filter(|r| r.needs_attention()).count();
    let active_staff = count_active(&staff, |s| s.status);

    rsx! {
        div { class: "card",
            h2 { "Welcome back, {name}" }
            p { "Here is an overview of the clinic today." }
        }

        div { class: "card-grid",
            StatCard { title: "Pending Exams", value: "{pending_exams}" }
            StatCard { title: "Ready for ASO", value: "{ready_for_aso}" }
            StatCard { title: "High Risk Cases", value: "{high_risks}", hint: "Needs attention" }
            StatCard { title: "Active Staff", value: "{active_staff}" }
        }

        div { class: "card",
            h3 { "Quick access" }
            div { class: "card-grid",
                for view in views.into_iter().filter(|v| *v != View::Dashboard) {
                    Link {
                        key: "{view.path()}",
                        to: Route::for_view(view),
                        class: "sidebar-link",
                        "{view.title()}"
                    }
                }
            }
        }
    }
}
