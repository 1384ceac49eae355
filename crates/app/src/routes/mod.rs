pub mod aso;
pub mod client_employees;
pub mod clinic_staff;
pub mod companies;
pub mod dashboard;
pub mod exams;
pub mod login;
pub mod not_found;
pub mod reports;
pub mod risks;

use crate::auth::{use_auth, use_visible_views};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdCalendar, LdFileText, LdFolder, LdLayoutDashboard, LdLogOut, LdShield,
    LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{rule_for, Navigation, View};

use aso::Aso;
use client_employees::ClientEmployees;
use clinic_staff::ClinicStaff;
use companies::Companies;
use dashboard::{Dashboard, Home};
use exams::Exams;
use login::Login;
use not_found::NotFound;
use reports::Reports;
use risks::Risks;

/// Application routes. Paths mirror the access table in `shared_types::access`.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/login")]
    Login {},
    #[layout(AuthGuard)]
    #[layout(AppLayout)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
    #[route("/companies")]
    Companies {},
    #[route("/employees/client")]
    ClientEmployees {},
    #[route("/employees/clinic")]
    ClinicStaff {},
    #[route("/exams")]
    Exams {},
    #[route("/aso")]
    Aso {},
    #[route("/risks")]
    Risks {},
    #[route("/reports")]
    Reports {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    pub fn for_view(view: View) -> Route {
        match view {
            View::Login => Route::Login {},
            View::Dashboard => Route::Dashboard {},
            View::Companies => Route::Companies {},
            View::ClientEmployees => Route::ClientEmployees {},
            View::ClinicStaff => Route::ClinicStaff {},
            View::Exams => Route::Exams {},
            View::Aso => Route::Aso {},
            View::Risks => Route::Risks {},
            View::Reports => Route::Reports {},
        }
    }

    /// View mounted by this route, per the access table.
    pub fn view(&self) -> Option<View> {
        rule_for(&self.to_string()).map(|rule| rule.view)
    }
}

/// Route for a guard redirect target. Anything unparseable goes to login.
fn redirect_route(target: &str) -> Route {
    target.parse::<Route>().unwrap_or(Route::Login {})
}

/// Auth guard layout. Every guarded route passes through here before its
/// view mounts; the decision comes from the session and the access table.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();
    let route: Route = use_route();

    if !auth.is_restored() {
        return rsx! {
            div { class: "auth-guard-loading",
                p { "Loading..." }
            }
        };
    }

    match auth.navigate(&route.to_string()) {
        Navigation::Render(_) => rsx! { Outlet::<Route> {} },
        Navigation::Redirect(target) => {
            tracing::debug!(from = %route, to = target, "Route guard redirect");
            navigator().replace(redirect_route(target));
            rsx! {
                div { class: "auth-guard-loading",
                    p { "Redirecting..." }
                }
            }
        }
    }
}

fn view_icon(view: View) -> Element {
    match view {
        View::Login | View::Dashboard => rsx! {
            Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
        },
        View::Companies => rsx! {
            Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
        },
        View::ClientEmployees => rsx! {
            Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 }
        },
        View::ClinicStaff => rsx! {
            Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
        },
        View::Exams => rsx! {
            Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
        },
        View::Aso => rsx! {
            Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
        },
        View::Risks => rsx! {
            Icon::<LdShield> { icon: LdShield, width: 18, height: 18 }
        },
        View::Reports => rsx! {
            Icon::<LdFolder> { icon: LdFolder, width: 18, height: 18 }
        },
    }
}

/// Main app layout with sidebar and top navbar.
#[component]
fn AppLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let views = use_visible_views();

    let current_view = route.view();
    let page_title = current_view.map(|v| v.title()).unwrap_or("");
    let identity = auth.current_identity();

    let handle_logout = move |_| {
        auth.logout();
        navigator().replace(Route::Login {});
    };

    rsx! {
        div { class: "app-shell",
            nav { class: "sidebar",
                div { class: "sidebar-brand", "Clinic Dashboard" }
                for view in views {
                    Link {
                        key: "{view.path()}",
                        to: Route::for_view(view),
                        class: if current_view == Some(view) { "sidebar-link active" } else { "sidebar-link" },
                        {view_icon(view)}
                        "{view.title()}"
                    }
                }
            }

            div { class: "main",
                header { class: "navbar",
                    h1 { "{page_title}" }
                    if let Some(user) = identity {
                        div { class: "navbar-user",
                            span { class: "badge", "{user.initials()}" }
                            span { " {user.name} " }
                            span { class: "badge", "{user.role.label()}" }
                            button {
                                class: "button button-secondary",
                                onclick: handle_logout,
                                Icon::<LdLogOut> { icon: LdLogOut, width: 16, height: 16 }
                                " Sign out"
                            }
                        }
                    }
                }
                main { class: "page",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
