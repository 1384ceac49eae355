use axum::http::StatusCode;
use clinic_api::api::{
    ASO_TREND, COMPANIES, EXAMS_BY_MONTH, FITNESS_TREND, RISKS_BY_CATEGORY,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, ReportSummary};

use crate::common;

#[tokio::test]
async fn test_load_report_summary() {
    let (client, stub) = common::spawn_backend().await;
    stub.seed(
        COMPANIES.path,
        vec![
            common::company_json(json!("1"), "Tech Solutions Ltda", 150),
            common::company_json(json!("2"), "Construtora ABC", 320),
        ],
    )
    .await;

    let report = client.load_report().await.unwrap();

    assert_eq!(report.companies.len(), 2);
    assert_eq!(report.fitness_trend.len(), 2);
    assert_eq!(
        report.summary(),
        ReportSummary {
            total_employees: 470,
            exams_total: 48 + 37,
            active_risks: 12,
            asos_issued: 68,
        }
    );
}

#[tokio::test]
async fn test_load_report_with_no_companies() {
    let (client, _stub) = common::spawn_backend().await;

    let report = client.load_report().await.unwrap();
    assert_eq!(report.summary().total_employees, 0);
    assert_eq!(report.risks_by_category.len(), 3);
}

#[tokio::test]
async fn test_load_report_is_all_or_nothing() {
    for failing in [
        COMPANIES.path,
        EXAMS_BY_MONTH.path,
        ASO_TREND.path,
        RISKS_BY_CATEGORY.path,
        FITNESS_TREND.path,
    ] {
        let (client, stub) = common::spawn_backend().await;
        stub.fail_with(failing, StatusCode::INTERNAL_SERVER_ERROR, "")
            .await;

        let err = client.load_report().await.unwrap_err();
        assert_eq!(err.kind, AppErrorKind::Http, "failing path {failing}");
        assert_eq!(err.status, Some(500));
    }
}

#[tokio::test]
async fn test_load_report_decode_failure_fails_whole_report() {
    let (client, stub) = common::spawn_backend().await;
    stub.fail_with(FITNESS_TREND.path, StatusCode::OK, "not json").await;

    let err = client.load_report().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Decode);
}
