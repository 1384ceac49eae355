use shared_types::{navigate, Identity, Navigation, Role};

use super::directory::Directory;
use super::store::SessionStore;

/// Decode a stored identity. Corrupted JSON or an unknown role yields `None`.
pub fn decode_identity(raw: &str) -> Option<Identity> {
    match serde_json::from_str::<Identity>(raw) {
        Ok(identity) if !identity.id.is_empty() => Some(identity),
        Ok(_) => {
            tracing::warn!("Stored identity has an empty id, ignoring it");
            None
        }
        Err(e) => {
            tracing::warn!(error = %e, "Stored identity is unreadable, ignoring it");
            None
        }
    }
}

/// The authenticated session: one identity slot mirrored to a durable store.
///
/// Lifecycle: [`Session::restore`] reads the store once, [`Session::login`]
/// and [`Session::logout`] are the only mutations, and the route guard reads
/// through [`Session::navigate`].
#[derive(Debug)]
pub struct Session<S> {
    directory: Directory,
    store: S,
    current: Option<Identity>,
}

impl<S: SessionStore> Session<S> {
    /// Start a session, picking up any identity left in the store.
    pub fn restore(directory: Directory, store: S) -> Self {
        let current = match store.load() {
            Ok(Some(raw)) => decode_identity(&raw),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(error = %e, "Session store unavailable, starting signed out");
                None
            }
        };
        if let Some(identity) = &current {
            tracing::debug!(email = %identity.email, role = %identity.role, "Session restored");
        }
        Self {
            directory,
            store,
            current,
        }
    }

    /// Adopt an identity read asynchronously from the store after startup.
    /// Ignored once someone has logged in.
    pub fn adopt_stored(&mut self, raw: Option<&str>) {
        if self.current.is_some() {
            return;
        }
        self.current = raw.and_then(decode_identity);
    }

    /// Authenticate against the directory. Returns `false` on bad credentials
    /// and leaves the current session as it was.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        let Some(identity) = self.directory.authenticate(email, password).cloned() else {
            tracing::info!(email = email, "Login rejected");
            return false;
        };

        match serde_json::to_string(&identity) {
            Ok(raw) => {
                if let Err(e) = self.store.save(&raw) {
                    tracing::warn!(error = %e, "Failed to persist session, keeping it in memory");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Failed to serialize session"),
        }

        tracing::info!(email = email, role = %identity.role, "Login succeeded");
        self.current = Some(identity);
        true
    }

    /// Clear the identity and the stored copy. Safe to call when signed out.
    pub fn logout(&mut self) {
        if let Some(identity) = self.current.take() {
            tracing::info!(email = %identity.email, "Logged out");
        }
        if let Err(e) = self.store.clear() {
            tracing::warn!(error = %e, "Failed to clear stored session");
        }
    }

    pub fn current_identity(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn role(&self) -> Option<Role> {
        self.current.as_ref().map(|i| i.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    /// Route guard for the current identity.
    pub fn navigate(&self, path: &str) -> Navigation {
        navigate(path, self.current.as_ref())
    }
}
