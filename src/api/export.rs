use super::{ApiClient, ApiError, PdfPreview};

impl ApiClient {
    /// Render page previews for an uploaded PDF. No identity is attached;
    /// the platform previews whatever it is handed.
    pub async fn pdf_preview(
        &self,
        file_name: String,
        file_bytes: Vec<u8>,
    ) -> Result<PdfPreview, ApiError> {
        let file = reqwest::multipart::Part::bytes(file_bytes)
            .file_name(file_name)
            .mime_str("application/pdf")
            .map_err(ApiError::Transport)?;
        let multipart = reqwest::multipart::Form::new().part("file", file);

        self.post_multipart("/pdf-preview", &[], multipart).await
    }
}
