use serde::{Deserialize, Serialize};
use std::fmt;

/// Clinic user role controlling which views are reachable.
///
/// - `Admin`: every view, including clinic staff management.
/// - `Doctor`: exams, ASO issuance, risks and reports.
/// - `Employee`: company and client-employee registration, reports.
///
/// The set is closed: a stored or received role string outside it does not
/// decode, so an unrecognized role can never reach a guarded view.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Doctor,
    Employee,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Doctor, Role::Employee];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Doctor => "doctor",
            Role::Employee => "employee",
        }
    }

    /// Human label for the navbar.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Doctor => "Doctor",
            Role::Employee => "Employee",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The authenticated user held by the session.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl Identity {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            role,
        }
    }

    /// Initials for the avatar fallback, e.g. "Dr. Maria Silva" -> "MS".
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter(|w| !w.ends_with('.'))
            .filter_map(|w| w.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase()
    }
}
