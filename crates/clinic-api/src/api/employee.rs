use shared_types::{AppError, Employee, NewEmployee};
use validator::Validate;

use super::{ApiClient, Endpoint};

pub const CLIENT_EMPLOYEES: Endpoint = Endpoint {
    path: "/funcionarios_cliente",
    plural: "employees",
    singular: "employee",
};

impl ApiClient {
    pub async fn list_employees(&self) -> Result<Vec<Employee>, AppError> {
        self.list(&CLIENT_EMPLOYEES).await
    }

    /// Validate the form payload, then register the client employee.
    pub async fn create_employee(&self, employee: &NewEmployee) -> Result<Employee, AppError> {
        employee.validate()?;
        self.create(&CLIENT_EMPLOYEES, employee).await
    }
}
