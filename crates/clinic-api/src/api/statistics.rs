use shared_types::{AppError, AsoTrend, ExamsByMonth, FitnessTrend, RiskCategoryShare};

use super::{ApiClient, Endpoint};

pub const EXAMS_BY_MONTH: Endpoint = Endpoint {
    path: "/relatorios/exames_por_mes",
    plural: "exams by month",
    singular: "exam statistic",
};

pub const ASO_TREND: Endpoint = Endpoint {
    path: "/relatorios/aso_trend",
    plural: "ASO trend",
    singular: "ASO statistic",
};

pub const RISKS_BY_CATEGORY: Endpoint = Endpoint {
    path: "/relatorios/risco_categoria",
    plural: "risks by category",
    singular: "risk statistic",
};

pub const FITNESS_TREND: Endpoint = Endpoint {
    path: "/relatorios/fitness_trend",
    plural: "fitness trend",
    singular: "fitness statistic",
};

impl ApiClient {
    pub async fn exams_by_month(&self) -> Result<Vec<ExamsByMonth>, AppError> {
        self.list(&EXAMS_BY_MONTH).await
    }

    pub async fn aso_trend(&self) -> Result<Vec<AsoTrend>, AppError> {
        self.list(&ASO_TREND).await
    }

    pub async fn risks_by_category(&self) -> Result<Vec<RiskCategoryShare>, AppError> {
        self.list(&RISKS_BY_CATEGORY).await
    }

    pub async fn fitness_trend(&self) -> Result<Vec<FitnessTrend>, AppError> {
        self.list(&FITNESS_TREND).await
    }
}
