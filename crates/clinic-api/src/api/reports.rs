use shared_types::{AppError, ReportData};

use super::ApiClient;

impl ApiClient {
    /// Fetch every series the reports view needs, concurrently.
    ///
    /// All-or-nothing: the first failure is returned and no partial data
    /// escapes. Requests still in flight when one fails are dropped.
    #[tracing::instrument(skip(self))]
    pub async fn load_report(&self) -> Result<ReportData, AppError> {
        let (companies, exams_by_month, aso_trend, risks_by_category, fitness_trend) = tokio::try_join!(
            self.list_companies(),
            self.exams_by_month(),
            self.aso_trend(),
            self.risks_by_category(),
            self.fitness_trend(),
        )?;

        Ok(ReportData {
            companies,
            exams_by_month,
            aso_trend,
            risks_by_category,
            fitness_trend,
        })
    }
}
