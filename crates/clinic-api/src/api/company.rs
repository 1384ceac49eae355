use shared_types::{AppError, Company, NewCompany};
use validator::Validate;

use super::{ApiClient, Endpoint};

pub const COMPANIES: Endpoint = Endpoint {
    path: "/empresas",
    plural: "companies",
    singular: "company",
};

impl ApiClient {
    pub async fn list_companies(&self) -> Result<Vec<Company>, AppError> {
        self.list(&COMPANIES).await
    }

    /// Validate the form payload, then register the company.
    pub async fn create_company(&self, company: &NewCompany) -> Result<Company, AppError> {
        company.validate()?;
        self.create(&COMPANIES, company).await
    }
}
