use serde::{Deserialize, Serialize};

/// Backend origin used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8080";

fn default_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

/// Settings for the resource-access client.
///
/// Every field has a default so that a missing or partial `config.toml`
/// still yields a working client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiConfig {
    /// Join an endpoint path onto the base URL without doubling slashes.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
}
