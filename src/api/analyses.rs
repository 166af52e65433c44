use super::{AnalysisDetail, AnalysisSummary, ApiClient, ApiError, ErrorRateReport, WordCloudEntry};
use crate::session::Identity;

impl ApiClient {
    /// Analyses are stored per role on the platform: students read their own
    /// from `/analyses`, teachers from `/teacher_analyses`.
    pub async fn list_analyses(
        &self,
        identity: Identity,
    ) -> Result<Vec<AnalysisSummary>, ApiError> {
        let path = match identity {
            Identity::Student { .. } => "/analyses",
            Identity::Teacher { .. } => "/teacher_analyses",
        };
        let (name, number) = identity.query_pair();
        self.get(path, &[(name, number.to_string())]).await
    }

    pub async fn get_analysis(
        &self,
        identity: Identity,
        analysis_id: i64,
    ) -> Result<AnalysisDetail, ApiError> {
        let path = match identity {
            Identity::Student { .. } => format!("/analyses/{analysis_id}"),
            Identity::Teacher { .. } => format!("/teacher_analyses/{analysis_id}"),
        };
        let (name, number) = identity.query_pair();
        self.get(&path, &[(name, number.to_string())]).await
    }

    pub async fn error_rates(&self, quiz_id: i64) -> Result<ErrorRateReport, ApiError> {
        self.get(&format!("/error-rates/{quiz_id}"), &[]).await
    }

    pub async fn word_cloud(&self, quiz_id: i64) -> Result<Vec<WordCloudEntry>, ApiError> {
        self.get(&format!("/word_cloud/{quiz_id}"), &[]).await
    }
}
