use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Categorization of errors raised at the backend boundary.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum AppErrorKind {
    /// The backend answered with a non-success status.
    Http,
    /// The request never produced a response.
    Network,
    /// The response body did not match the expected record shape.
    Decode,
    /// A create payload failed its field checks before any request.
    Validation,
    /// The durable session slot could not be read or written.
    Storage,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::Http => write!(f, "Http"),
            AppErrorKind::Network => write!(f, "Network"),
            AppErrorKind::Decode => write!(f, "Decode"),
            AppErrorKind::Validation => write!(f, "Validation"),
            AppErrorKind::Storage => write!(f, "Storage"),
        }
    }
}

/// Structured error shared by the resource client and the views.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
    /// HTTP status code, present only for `Http` errors.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub field_errors: HashMap<String, String>,
}

impl AppError {
    fn new(kind: AppErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            status: None,
            field_errors: HashMap::new(),
        }
    }

    /// Non-success response. `message` should already carry the status text.
    pub fn http(status: u16, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            ..Self::new(AppErrorKind::Http, message)
        }
    }

    pub fn network(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Network, message)
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Decode, message)
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::new(AppErrorKind::Storage, message)
    }

    pub fn validation(message: impl Into<String>, field_errors: HashMap<String, String>) -> Self {
        Self {
            field_errors,
            ..Self::new(AppErrorKind::Validation, message)
        }
    }

    /// Message suitable for a toast. Validation errors name their first field.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::Validation => {
                let mut fields: Vec<_> = self.field_errors.iter().collect();
                fields.sort();
                match fields.first() {
                    Some((field, msg)) => format!("{field}: {msg}"),
                    None => self.message.clone(),
                }
            }
            AppErrorKind::Network => "Could not reach the server. Please try again.".to_string(),
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors = HashMap::new();
        for (field, errs) in errors.field_errors() {
            if let Some(first) = errs.first() {
                let msg = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid value for {}", field));
                field_errors.insert(field.to_string(), msg);
            }
        }
        AppError::validation("Validation failed", field_errors)
    }
}
