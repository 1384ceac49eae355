use serde::{Deserialize, Serialize};

use crate::company::Company;

// ── Statistics rows ─────────────────────────────────────────────────

/// Exams performed per month, split by exam type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExamsByMonth {
    pub month: String,
    pub admission: u64,
    pub periodic: u64,
    pub return_to_work: u64,
    pub dismissal: u64,
}

impl ExamsByMonth {
    pub fn total(&self) -> u64 {
        self.admission + self.periodic + self.return_to_work + self.dismissal
    }
}

/// ASO issuance per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsoTrend {
    pub month: String,
    pub complete: u64,
    pub issued: u64,
    pub pending: u64,
}

/// Share of registered risks falling in one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskCategoryShare {
    #[serde(rename = "categoria")]
    pub category: String,
    #[serde(rename = "quantidade")]
    pub count: u64,
    #[serde(rename = "porcentagem")]
    pub percentage: f64,
}

/// Fitness-for-work results per month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FitnessTrend {
    pub month: String,
    pub fit: u64,
    pub fit_with_restrictions: u64,
    pub unfit: u64,
}

// ── Aggregate report ────────────────────────────────────────────────

/// Everything the reports view renders. Only built when every fetch succeeded.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReportData {
    pub companies: Vec<Company>,
    pub exams_by_month: Vec<ExamsByMonth>,
    pub aso_trend: Vec<AsoTrend>,
    pub risks_by_category: Vec<RiskCategoryShare>,
    pub fitness_trend: Vec<FitnessTrend>,
}

/// Headline figures shown on the report summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReportSummary {
    pub total_employees: u64,
    pub exams_total: u64,
    pub active_risks: u64,
    pub asos_issued: u64,
}

impl ReportData {
    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            total_employees: self
                .companies
                .iter()
                .map(|c| u64::from(c.employee_count))
                .sum(),
            exams_total: self.exams_by_month.iter().map(ExamsByMonth::total).sum(),
            active_risks: self.risks_by_category.iter().map(|r| r.count).sum(),
            asos_issued: self.aso_trend.iter().map(|a| a.issued).sum(),
        }
    }
}
