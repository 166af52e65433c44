// Platform API client - all persistent data lives behind the remote quiz
// platform; this service only ever holds per-request copies.

use std::time::Duration;

use color_eyre::Result;
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};

pub mod models;
pub use models::*;

mod analyses;
mod classes;
mod homework;
mod export;
mod quizzes;

pub use quizzes::GenerateQuizForm;

/// One failure taxonomy for every endpoint: the request never left or died in
/// flight, the platform answered non-2xx, or the payload did not match the
/// endpoint schema. No retry, no backoff; callers decide what to do.
#[derive(Debug)]
pub enum ApiError {
    Transport(reqwest::Error),
    Status { path: String, status: StatusCode },
    Decode { path: String, source: serde_json::Error },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "platform API request failed: {e}"),
            ApiError::Status { path, status } => {
                write!(f, "platform API returned {status} for {path}")
            }
            ApiError::Decode { path, source } => {
                write!(f, "platform API payload for {path} did not match schema: {source}")
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(e) => Some(e),
            ApiError::Decode { source, .. } => Some(source),
            ApiError::Status { .. } => None,
        }
    }
}

// Main platform API handle
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: std::sync::Arc<str>,
}

impl ApiClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.trim_end_matches('/').into();
        Ok(Self { http, base_url })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let resp = self
            .http
            .get(self.url(path))
            .query(query)
            .send()
            .await
            .map_err(|e| transport(path, e))?;
        decode(path, resp).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        let resp = self
            .http
            .post(self.url(path))
            .query(query)
            .json(body)
            .send()
            .await
            .map_err(|e| transport(path, e))?;
        decode(path, resp).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        form: reqwest::multipart::Form,
    ) -> Result<T, ApiError> {
        let resp = self
            .http
            .post(self.url(path))
            .query(query)
            .multipart(form)
            .send()
            .await
            .map_err(|e| transport(path, e))?;
        decode(path, resp).await
    }
}

fn transport(path: &str, e: reqwest::Error) -> ApiError {
    tracing::error!("request to {path} failed: {e}");
    ApiError::Transport(e)
}

async fn decode<T: DeserializeOwned>(path: &str, resp: reqwest::Response) -> Result<T, ApiError> {
    let status = resp.status();
    if !status.is_success() {
        let text = resp.text().await.unwrap_or_default();
        tracing::error!("platform API error: {status} for {path} - {text}");
        return Err(ApiError::Status {
            path: path.to_string(),
            status,
        });
    }

    let text = resp.text().await.map_err(|e| transport(path, e))?;
    serde_json::from_str(&text).map_err(|source| {
        tracing::error!("malformed payload from {path}: {source}");
        ApiError::Decode {
            path: path.to_string(),
            source,
        }
    })
}
