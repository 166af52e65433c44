use super::{ApiClient, ApiError, Class};

impl ApiClient {
    /// Classes taught by this teacher; drives the publish selection control.
    pub async fn list_classes(&self, tno: i64) -> Result<Vec<Class>, ApiError> {
        self.get("/classes", &[("tno", tno.to_string())]).await
    }
}
