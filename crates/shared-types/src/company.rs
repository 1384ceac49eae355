use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::common::{id_from_string_or_number, Record, RecordStatus};

/// A client company whose employees the clinic examines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    #[serde(deserialize_with = "id_from_string_or_number")]
    pub id: String,
    pub name: String,
    /// Brazilian company registry number.
    pub cnpj: String,
    pub address: String,
    pub phone: String,
    pub employee_count: u32,
    pub status: RecordStatus,
    pub registration_date: String,
}

impl Record for Company {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Payload for registering a company. Same fields as [`Company`] minus `id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewCompany {
    #[validate(length(min = 1, message = "Company name is required"))]
    pub name: String,
    #[validate(length(min = 14, max = 18, message = "CNPJ must have 14 digits"))]
    pub cnpj: String,
    #[validate(length(min = 1, message = "Address is required"))]
    pub address: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[serde(default)]
    pub employee_count: u32,
    #[serde(default)]
    pub status: RecordStatus,
    pub registration_date: String,
}

impl NewCompany {
    /// Whether `company` carries exactly the submitted fields.
    pub fn matches(&self, company: &Company) -> bool {
        self.name == company.name
            && self.cnpj == company.cnpj
            && self.address == company.address
            && self.phone == company.phone
            && self.employee_count == company.employee_count
            && self.status == company.status
            && self.registration_date == company.registration_date
    }
}
