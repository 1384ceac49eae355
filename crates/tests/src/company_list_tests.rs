use axum::http::StatusCode;
use clinic_api::api::COMPANIES;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, RecordStatus};

use crate::common;

#[tokio::test]
async fn test_list_companies_empty() {
    let (client, _stub) = common::spawn_backend().await;

    let companies = client.list_companies().await.unwrap();
    assert!(companies.is_empty());
}

#[tokio::test]
async fn test_list_companies_returns_backend_order() {
    let (client, stub) = common::spawn_backend().await;
    stub.seed(
        COMPANIES.path,
        vec![
            common::company_json(json!("a1"), "Tech Solutions Ltda", 150),
            common::company_json(json!(2), "Construtora ABC", 320),
        ],
    )
    .await;

    let companies = client.list_companies().await.unwrap();
    assert_eq!(companies.len(), 2);
    assert_eq!(companies[0].id, "a1");
    assert_eq!(companies[0].name, "Tech Solutions Ltda");
    assert_eq!(companies[1].id, "2");
    assert_eq!(companies[1].employee_count, 320);
    assert_eq!(companies[1].status, RecordStatus::Active);
}

#[tokio::test]
async fn test_list_companies_server_error_carries_status_text() {
    let (client, stub) = common::spawn_backend().await;
    stub.fail_with(COMPANIES.path, StatusCode::INTERNAL_SERVER_ERROR, "{}")
        .await;

    let err = client.list_companies().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Http);
    assert_eq!(err.status, Some(500));
    assert_eq!(err.message, "Failed to fetch companies: Internal Server Error");
}

#[tokio::test]
async fn test_list_companies_not_found() {
    let (client, stub) = common::spawn_backend().await;
    stub.fail_with(COMPANIES.path, StatusCode::NOT_FOUND, "").await;

    let err = client.list_companies().await.unwrap_err();
    assert_eq!(err.status, Some(404));
    assert!(err.message.contains("Not Found"));
}

#[tokio::test]
async fn test_list_companies_malformed_body_is_decode_error() {
    let (client, stub) = common::spawn_backend().await;
    stub.fail_with(COMPANIES.path, StatusCode::OK, r#"{"companies": []}"#)
        .await;

    let err = client.list_companies().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Decode);
}

#[tokio::test]
async fn test_list_companies_missing_field_is_decode_error() {
    let (client, stub) = common::spawn_backend().await;
    stub.seed(COMPANIES.path, vec![json!({"id": "1", "name": "No CNPJ"})])
        .await;

    let err = client.list_companies().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Decode);
}

#[tokio::test]
async fn test_list_companies_unreachable_backend_is_network_error() {
    let client = common::unreachable_client().await;

    let err = client.list_companies().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
    assert!(err.message.starts_with("Failed to fetch companies"));
}
