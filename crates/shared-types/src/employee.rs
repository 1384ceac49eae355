use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::{id_from_string_or_number, Record, RecordStatus};

/// An employee of a client company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    /// Brazilian individual taxpayer number.
    pub cpf: String,
    pub date_of_birth: String,
    /// Name of the employing company.
    pub company: String,
    pub position: String,
    pub department: String,
    pub admission_date: String,
    pub status: RecordStatus,
}

impl Employee {
    /// Case-insensitive match on name, company or position.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.company.to_lowercase().contains(&term)
            || self.position.to_lowercase().contains(&term)
    }
}

impl Record for Employee {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Payload for registering a client employee.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(length(min = 11, max = 14, message = "CPF must have 11 digits"))]
    pub cpf: String,
    #[validate(length(min = 1, message = "Date of birth is required"))]
    pub date_of_birth: String,
    #[validate(length(min = 1, message = "Company is required"))]
    pub company: String,
    #[validate(length(min = 1, message = "Position is required"))]
    pub position: String,
    pub department: String,
    #[validate(length(min = 1, message = "Admission date is required"))]
    pub admission_date: String,
    #[serde(default)]
    pub status: RecordStatus,
}

impl NewEmployee {
    /// Whether `employee` carries exactly the submitted fields.
    pub fn matches(&self, employee: &Employee) -> bool {
        self.name == employee.name
            && self.cpf == employee.cpf
            && self.date_of_birth == employee.date_of_birth
            && self.company == employee.company
            && self.position == employee.position
            && self.department == employee.department
            && self.admission_date == employee.admission_date
            && self.status == employee.status
    }
}
