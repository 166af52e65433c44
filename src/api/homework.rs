use super::{ApiClient, ApiError, Homework};

impl ApiClient {
    /// Quizzes this teacher has published to classes.
    pub async fn list_homework(&self, tno: i64) -> Result<Vec<Homework>, ApiError> {
        self.get("/homework", &[("tno", tno.to_string())]).await
    }
}
