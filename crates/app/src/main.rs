use clinic_api::ApiClient;
use dioxus::prelude::*;
use dioxus_primitives::toast::ToastProvider;

mod auth;
mod components;
mod fixtures;
mod routes;
mod storage;
use auth::AuthState;
use routes::Route;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "web") {
        "web"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    let mut auth = use_context_provider(AuthState::new);
    use_context_provider(ApiClient::from_config);

    use_hook(|| tracing::info!(platform = client_platform(), "Clinic dashboard starting"));

    // Browser storage is read asynchronously; the guard waits on `restored`.
    use_future(move || async move {
        if storage::restores_async() {
            let raw = storage::read_browser_slot().await;
            auth.adopt_stored(raw.as_deref());
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ToastProvider {
            Router::<Route> {}
        }
    }
}
