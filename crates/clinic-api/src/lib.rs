pub mod api;
pub mod auth;
pub mod config;

pub use api::ApiClient;
pub use auth::{Directory, Session, SessionStore};
