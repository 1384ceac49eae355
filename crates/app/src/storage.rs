use clinic_api::auth::{FileStore, MemoryStore, SessionStore, SESSION_KEY};
use dioxus::prelude::*;
use shared_types::AppError;
use std::path::PathBuf;

/// Session slot for the platform this binary was built for.
pub type AppStore = Box<dyn SessionStore>;

/// Browser builds read `localStorage` through `eval`, which is asynchronous,
/// so the stored identity arrives after the first render.
pub fn restores_async() -> bool {
    cfg!(feature = "web") && !cfg!(feature = "desktop")
}

pub fn app_store() -> AppStore {
    if cfg!(feature = "desktop") {
        Box::new(FileStore::new(data_dir()))
    } else if cfg!(feature = "web") {
        Box::new(BrowserStore)
    } else {
        Box::new(MemoryStore::new())
    }
}

/// Directory for the desktop session file. `CLINIC_DATA_DIR` overrides it.
fn data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("CLINIC_DATA_DIR") {
        return PathBuf::from(dir);
    }
    std::env::var_os("HOME")
        .map(|home| PathBuf::from(home).join(".clinic-dashboard"))
        .unwrap_or_else(|| std::env::temp_dir().join("clinic-dashboard"))
}

/// `localStorage` slot. Writes are fire-and-forget; the JS side swallows
/// quota and disabled-storage errors.
pub struct BrowserStore;

impl SessionStore for BrowserStore {
    fn load(&self) -> Result<Option<String>, AppError> {
        // Read asynchronously by `read_browser_slot` once the app is mounted.
        Ok(None)
    }

    fn save(&self, value: &str) -> Result<(), AppError> {
        let literal = serde_json::to_string(value)
            .map_err(|e| AppError::storage(format!("Failed to encode session: {e}")))?;
        document::eval(&format!(
            "try {{ localStorage.setItem('{SESSION_KEY}', {literal}); }} catch (e) {{}}"
        ));
        Ok(())
    }

    fn clear(&self) -> Result<(), AppError> {
        document::eval(&format!(
            "try {{ localStorage.removeItem('{SESSION_KEY}'); }} catch (e) {{}}"
        ));
        Ok(())
    }
}

/// Raw value of the browser slot, or `None` if absent or unreadable.
pub async fn read_browser_slot() -> Option<String> {
    let script = format!(
        "try {{ return localStorage.getItem('{SESSION_KEY}'); }} catch (e) {{ return null; }}"
    );
    match document::eval(&script).join::<Option<String>>().await {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(error = ?e, "Could not read stored session");
            None
        }
    }
}
