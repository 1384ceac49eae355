use serde::{Deserialize, Serialize};

use crate::common::{id_from_string_or_number, Record, RecordStatus};

/// Function of a clinic staff member. Unrelated to the login [`crate::Role`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StaffRole {
    Doctor,
    Nurse,
    Technician,
    Administrator,
}

impl StaffRole {
    pub fn label(&self) -> &'static str {
        match self {
            StaffRole::Doctor => "Doctor",
            StaffRole::Nurse => "Nurse",
            StaffRole::Technician => "Technician",
            StaffRole::Administrator => "Administrator",
        }
    }
}

/// A member of the clinic's own staff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicStaff {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    pub role: StaffRole,
    /// Professional council registration, e.g. "CRM-SP 123456".
    pub registration_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialty: Option<String>,
    pub email: String,
    pub phone: String,
    pub hire_date: String,
    pub status: RecordStatus,
}

impl ClinicStaff {
    /// Case-insensitive match on name, role or registration number.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.role.label().to_lowercase().contains(&term)
            || self.registration_number.to_lowercase().contains(&term)
    }
}

impl Record for ClinicStaff {
    fn id(&self) -> &str {
        &self.id
    }
}
