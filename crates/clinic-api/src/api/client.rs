use reqwest::{Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use shared_types::{ApiConfig, AppError, Record};

/// A backend collection and the names used for it in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    /// Used in "Failed to fetch {plural}".
    pub plural: &'static str,
    /// Used in "Failed to create {singular}".
    pub singular: &'static str,
}

/// Thin HTTP client for the clinic backend.
///
/// One request per call: no retry, no timeout, no caching. Callers sequence
/// or join calls themselves.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Client for the process-wide config (`config.toml` + environment).
    pub fn from_config() -> Self {
        Self::new(crate::config::load_api_config().clone())
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// GET the collection and decode it as a JSON array.
    #[tracing::instrument(skip(self, endpoint), fields(path = endpoint.path))]
    pub async fn list<T: DeserializeOwned>(&self, endpoint: &Endpoint) -> Result<Vec<T>, AppError> {
        let url = self.config.endpoint(endpoint.path);
        let response = self.http.get(&url).send().await.map_err(|e| {
            tracing::error!(error = %e, url = %url, "Request failed");
            AppError::network(format!("Failed to fetch {}: {}", endpoint.plural, e))
        })?;

        let body = success_body(response, "fetch", endpoint.plural).await?;
        let items: Vec<T> = decode(&body, endpoint.plural)?;
        tracing::info!(count = items.len(), "Fetched {}", endpoint.plural);
        Ok(items)
    }

    /// POST `payload` as JSON and decode the created record.
    #[tracing::instrument(skip(self, endpoint, payload), fields(path = endpoint.path))]
    pub async fn create<N, T>(&self, endpoint: &Endpoint, payload: &N) -> Result<T, AppError>
    where
        N: Serialize,
        T: DeserializeOwned + Record,
    {
        let url = self.config.endpoint(endpoint.path);
        // `.json()` sets `Content-Type: application/json`.
        let response = self
            .http
            .post(&url)
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, url = %url, "Request failed");
                AppError::network(format!("Failed to create {}: {}", endpoint.singular, e))
            })?;

        let body = success_body(response, "create", endpoint.singular).await?;
        let created: T = decode(&body, endpoint.singular)?;
        if !created.has_id() {
            return Err(AppError::decode(format!(
                "Created {} has no id",
                endpoint.singular
            )));
        }
        tracing::info!(id = created.id(), "Created {}", endpoint.singular);
        Ok(created)
    }
}

/// Reason phrase for a status, the way a browser reports `statusText`.
pub fn status_text(status: StatusCode) -> &'static str {
    status.canonical_reason().unwrap_or("Unknown Status")
}

/// Return the body of a successful response, or an `Http` error naming the status.
async fn success_body(response: Response, action: &str, noun: &str) -> Result<String, AppError> {
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(status = status.as_u16(), "Backend returned non-success status");
        return Err(AppError::http(
            status.as_u16(),
            format!("Failed to {} {}: {}", action, noun, status_text(status)),
        ));
    }

    response
        .text()
        .await
        .map_err(|e| AppError::network(format!("Failed to read {} response: {}", noun, e)))
}

fn decode<T: DeserializeOwned>(body: &str, noun: &str) -> Result<T, AppError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::warn!(error = %e, "Malformed {} payload", noun);
        AppError::decode(format!("Invalid {} payload: {}", noun, e))
    })
}
