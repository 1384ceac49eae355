use axum::http::StatusCode;
use clinic_api::api::{ASO_TREND, RISKS_BY_CATEGORY};
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common;

#[tokio::test]
async fn test_exams_by_month_decodes_rows() {
    let (client, _stub) = common::spawn_backend().await;

    let rows = client.exams_by_month().await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].month, "Jan");
    assert_eq!(rows[0].total(), 48);
}

#[tokio::test]
async fn test_risks_by_category_uses_backend_names() {
    let (client, _stub) = common::spawn_backend().await;

    let rows = client.risks_by_category().await.unwrap();
    let categories: Vec<_> = rows.iter().map(|r| r.category.as_str()).collect();
    assert_eq!(categories, vec!["physical", "chemical", "ergonomic"]);
    assert_eq!(rows[0].count, 6);
}

#[tokio::test]
async fn test_aso_trend_and_fitness_trend() {
    let (client, _stub) = common::spawn_backend().await;

    let aso = client.aso_trend().await.unwrap();
    let fitness = client.fitness_trend().await.unwrap();
    assert_eq!(aso.iter().map(|a| a.issued).sum::<u64>(), 68);
    assert_eq!(fitness[1].fit_with_restrictions, 4);
}

#[tokio::test]
async fn test_statistics_error_names_the_series() {
    let (client, stub) = common::spawn_backend().await;
    stub.fail_with(ASO_TREND.path, StatusCode::INTERNAL_SERVER_ERROR, "")
        .await;
    stub.fail_with(RISKS_BY_CATEGORY.path, StatusCode::OK, "[{\"categoria\": 1}]")
        .await;

    let aso_err = client.aso_trend().await.unwrap_err();
    assert_eq!(aso_err.kind, AppErrorKind::Http);
    assert!(aso_err.message.contains("Internal Server Error"));

    let risk_err = client.risks_by_category().await.unwrap_err();
    assert_eq!(risk_err.kind, AppErrorKind::Decode);
}
