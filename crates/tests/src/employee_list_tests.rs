use axum::http::StatusCode;
use clinic_api::api::CLIENT_EMPLOYEES;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::AppErrorKind;

use crate::common;

#[tokio::test]
async fn test_list_employees_success() {
    let (client, stub) = common::spawn_backend().await;
    stub.seed(
        CLIENT_EMPLOYEES.path,
        vec![
            common::employee_json(json!("e-1"), "João Silva"),
            common::employee_json(json!(2), "Maria Santos"),
        ],
    )
    .await;

    let employees = client.list_employees().await.unwrap();
    let names: Vec<_> = employees.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["João Silva", "Maria Santos"]);
    assert_eq!(employees[1].id, "2");
    assert_eq!(employees[0].date_of_birth, "1990-05-15");
}

#[tokio::test]
async fn test_list_employees_server_error() {
    let (client, stub) = common::spawn_backend().await;
    stub.fail_with(CLIENT_EMPLOYEES.path, StatusCode::SERVICE_UNAVAILABLE, "")
        .await;

    let err = client.list_employees().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Http);
    assert_eq!(err.message, "Failed to fetch employees: Service Unavailable");
}

#[tokio::test]
async fn test_list_employees_unknown_status_is_decode_error() {
    let (client, stub) = common::spawn_backend().await;
    let mut row = common::employee_json(json!("e-1"), "João Silva");
    row["status"] = json!("suspended");
    stub.seed(CLIENT_EMPLOYEES.path, vec![row]).await;

    let err = client.list_employees().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Decode);
}
