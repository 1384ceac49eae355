use clinic_api::{Directory, Session};
use dioxus::prelude::*;
use shared_types::{views_for, Identity, Navigation, Role, View};

use crate::storage::{app_store, restores_async, AppStore};

/// Global authentication state.
///
/// Wraps the one session slot. `restored` stays `false` until the persisted
/// identity has been read, so the guard does not bounce a reload to `/login`.
#[derive(Clone, Copy, PartialEq)]
pub struct AuthState {
    pub session: Signal<Session<AppStore>>,
    pub restored: Signal<bool>,
}

impl AuthState {
    pub fn new() -> Self {
        Self {
            session: Signal::new(Session::restore(Directory::demo(), app_store())),
            restored: Signal::new(!restores_async()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_authenticated()
    }

    pub fn is_restored(&self) -> bool {
        *self.restored.read()
    }

    pub fn current_identity(&self) -> Option<Identity> {
        self.session.read().current_identity().cloned()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.read().role()
    }

    /// Returns `false` on bad credentials; the session is left as it was.
    pub fn login(&mut self, email: &str, password: &str) -> bool {
        self.session.write().login(email, password)
    }

    pub fn logout(&mut self) {
        self.session.write().logout();
    }

    pub fn navigate(&self, path: &str) -> Navigation {
        self.session.read().navigate(path)
    }

    /// Finish a deferred restore with the raw stored value.
    pub fn adopt_stored(&mut self, raw: Option<&str>) {
        self.session.write().adopt_stored(raw);
        self.restored.set(true);
    }

    pub fn demo_users(&self) -> Vec<Identity> {
        self.session.read().directory().users().to_vec()
    }
}

/// Hook to access auth state.
pub fn use_auth() -> AuthState {
    use_context::<AuthState>()
}

/// Role of the signed-in user, if any.
pub fn use_role() -> Option<Role> {
    use_auth().role()
}

/// Sidebar entries for the current user.
pub fn use_visible_views() -> Vec<View> {
    use_role().map(views_for).unwrap_or_default()
}
