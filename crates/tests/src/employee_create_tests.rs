use axum::http::StatusCode;
use clinic_api::api::CLIENT_EMPLOYEES;
use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, NewEmployee, RecordStatus};

use crate::common;

fn new_employee() -> NewEmployee {
    NewEmployee {
        name: "Carlos Oliveira".to_string(),
        cpf: "987.654.321-00".to_string(),
        date_of_birth: "1985-08-22".to_string(),
        company: "Construtora ABC".to_string(),
        position: "Mestre de Obras".to_string(),
        department: "Operações".to_string(),
        admission_date: "2023-11-10".to_string(),
        status: RecordStatus::Active,
    }
}

#[tokio::test]
async fn test_create_employee_success() {
    let (client, stub) = common::spawn_backend().await;
    let payload = new_employee();

    let created = client.create_employee(&payload).await.unwrap();

    assert!(!created.id.is_empty());
    assert!(payload.matches(&created));
    assert_eq!(stub.content_types().await, vec!["application/json".to_string()]);
    assert_eq!(
        stub.rows(CLIENT_EMPLOYEES.path).await[0]["admissionDate"],
        "2023-11-10"
    );
}

#[tokio::test]
async fn test_create_employee_server_error() {
    let (client, stub) = common::spawn_backend().await;
    stub.fail_with(CLIENT_EMPLOYEES.path, StatusCode::BAD_REQUEST, "{}")
        .await;

    let err = client.create_employee(&new_employee()).await.unwrap_err();
    assert_eq!(err.status, Some(400));
    assert_eq!(err.message, "Failed to create employee: Bad Request");
}

#[tokio::test]
async fn test_create_employee_validation_failure() {
    let (client, stub) = common::spawn_backend().await;
    let payload = NewEmployee {
        cpf: String::new(),
        position: String::new(),
        ..new_employee()
    };

    let err = client.create_employee(&payload).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Validation);
    let mut fields: Vec<_> = err.field_errors.keys().cloned().collect();
    fields.sort();
    assert_eq!(fields, vec!["cpf".to_string(), "position".to_string()]);
    assert!(stub.rows(CLIENT_EMPLOYEES.path).await.is_empty());
}
