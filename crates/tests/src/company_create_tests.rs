use axum::http::StatusCode;
use clinic_api::api::COMPANIES;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, NewCompany, RecordStatus};

use crate::common;

fn new_company() -> NewCompany {
    NewCompany {
        name: "Indústria XYZ".to_string(),
        cnpj: "11.222.333/0001-44".to_string(),
        address: "Rua das Indústrias, 500 - Campinas, SP".to_string(),
        phone: "(19) 3333-5555".to_string(),
        employee_count: 85,
        status: RecordStatus::Active,
        registration_date: "2024-03-01".to_string(),
    }
}

#[tokio::test]
async fn test_create_company_success() {
    let (client, stub) = common::spawn_backend().await;
    let payload = new_company();

    let created = client.create_company(&payload).await.unwrap();

    assert!(!created.id.is_empty(), "Created company should carry an id");
    assert!(payload.matches(&created), "Submitted fields should round-trip");
    assert_eq!(stub.rows(COMPANIES.path).await.len(), 1);
}

#[tokio::test]
async fn test_create_company_sends_json_content_type() {
    let (client, stub) = common::spawn_backend().await;

    client.create_company(&new_company()).await.unwrap();

    assert_eq!(stub.content_types().await, vec!["application/json".to_string()]);
}

#[tokio::test]
async fn test_create_company_uses_camel_case_wire_names() {
    let (client, stub) = common::spawn_backend().await;

    client.create_company(&new_company()).await.unwrap();

    let stored = &stub.rows(COMPANIES.path).await[0];
    assert_eq!(stored["employeeCount"], json!(85));
    assert_eq!(stored["registrationDate"], json!("2024-03-01"));
    assert!(stored.get("employee_count").is_none());
}

#[tokio::test]
async fn test_created_company_then_listed() {
    let (client, _stub) = common::spawn_backend().await;

    let created = client.create_company(&new_company()).await.unwrap();
    let companies = client.list_companies().await.unwrap();

    assert_eq!(companies, vec![created]);
}

#[tokio::test]
async fn test_create_company_accepts_numeric_id() {
    let (client, stub) = common::spawn_backend().await;
    stub.force_created_id(json!(17)).await;

    let created = client.create_company(&new_company()).await.unwrap();
    assert_eq!(created.id, "17");
}

#[tokio::test]
async fn test_create_company_empty_id_is_rejected() {
    let (client, stub) = common::spawn_backend().await;
    stub.force_created_id(json!("")).await;

    let err = client.create_company(&new_company()).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Decode);
    assert_eq!(err.message, "Created company has no id");
}

#[tokio::test]
async fn test_create_company_server_error() {
    let (client, stub) = common::spawn_backend().await;
    stub.fail_with(COMPANIES.path, StatusCode::INTERNAL_SERVER_ERROR, "{}")
        .await;

    let err = client.create_company(&new_company()).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Http);
    assert_eq!(err.message, "Failed to create company: Internal Server Error");
}

#[tokio::test]
async fn test_create_company_invalid_payload_never_reaches_backend() {
    let (client, stub) = common::spawn_backend().await;
    let payload = NewCompany {
        name: String::new(),
        cnpj: "123".to_string(),
        ..new_company()
    };

    let err = client.create_company(&payload).await.unwrap_err();

    assert_eq!(err.kind, AppErrorKind::Validation);
    assert!(err.field_errors.contains_key("name"));
    assert!(err.field_errors.contains_key("cnpj"));
    assert!(stub.content_types().await.is_empty());
}
