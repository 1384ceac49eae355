use shared_types::{Identity, Role};

/// Shared password accepted for every directory entry.
pub const DEMO_PASSWORD: &str = "password";

/// Fixed set of identities that may log in.
#[derive(Debug, Clone, PartialEq)]
pub struct Directory {
    users: Vec<Identity>,
    password: String,
}

impl Directory {
    pub fn new(users: Vec<Identity>, password: impl Into<String>) -> Self {
        Self {
            users,
            password: password.into(),
        }
    }

    /// The clinic's demonstration accounts, one per role.
    pub fn demo() -> Self {
        Self::new(
            vec![
                Identity::new("1", "Dr. Maria Silva", "admin@clinic.com", Role::Admin),
                Identity::new("2", "Dr. João Santos", "doctor@clinic.com", Role::Doctor),
                Identity::new("3", "Ana Costa", "employee@clinic.com", Role::Employee),
            ],
            DEMO_PASSWORD,
        )
    }

    pub fn users(&self) -> &[Identity] {
        &self.users
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Identity> {
        self.users.iter().find(|u| u.email == email)
    }

    /// The identity for `email`, if it exists and `password` is the shared one.
    pub fn authenticate(&self, email: &str, password: &str) -> Option<&Identity> {
        self.find_by_email(email)
            .filter(|_| password == self.password)
    }
}

impl Default for Directory {
    fn default() -> Self {
        Self::demo()
    }
}
