use shared_types::{ApiConfig, AppConfig};
use std::sync::OnceLock;

static API_CONFIG: OnceLock<ApiConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding `[api] base_url`.
pub const BASE_URL_ENV: &str = "CLINIC_API_BASE_URL";

/// Build the client config from the raw config file (if any) and the
/// environment override (if any). The override wins over the file, the file
/// wins over the built-in default.
pub fn resolve_api_config(file_contents: Option<&str>, base_url_override: Option<String>) -> ApiConfig {
    let mut config = match file_contents {
        Some(contents) => match toml::from_str::<AppConfig>(contents) {
            Ok(parsed) => parsed.api,
            Err(e) => {
                tracing::warn!(error = %e, path = CONFIG_PATH, "Failed to parse config, using defaults");
                ApiConfig::default()
            }
        },
        None => ApiConfig::default(),
    };

    if let Some(url) = base_url_override.filter(|u| !u.trim().is_empty()) {
        config.base_url = url;
    }
    config
}

/// Read `config.toml` and the environment once and store the result.
/// Later calls return the first result.
pub fn load_api_config() -> &'static ApiConfig {
    API_CONFIG.get_or_init(|| {
        let _ = dotenvy::dotenv();
        let contents = std::fs::read_to_string(CONFIG_PATH).ok();
        let config = resolve_api_config(contents.as_deref(), std::env::var(BASE_URL_ENV).ok());
        tracing::info!(base_url = %config.base_url, "API config loaded");
        config
    })
}
