use dioxus::prelude::*;

use crate::routes::Route;

/// Unknown paths are not rendered; they redirect to the login page.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));
    tracing::debug!(path = %path, "Unknown route, redirecting to login");
    navigator().replace(Route::Login {});

    rsx! {
        div { class: "auth-guard-loading",
            p { "Redirecting..." }
        }
    }
}
