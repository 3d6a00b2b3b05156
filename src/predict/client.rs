use anyhow::Context;
use axum::http::StatusCode;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::InferenceConfig;
use crate::error::ApiError;

pub const FALLBACK_FILENAME: &str = "upload.jpg";

/// An uploaded image as forwarded to the inference service.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub bytes: Bytes,
    pub filename: Option<String>,
    pub content_type: Option<String>,
}

impl UploadedImage {
    pub fn resolved_filename(&self) -> &str {
        match self.filename.as_deref() {
            Some(name) if !name.trim().is_empty() => name,
            _ => FALLBACK_FILENAME,
        }
    }

    fn to_part(&self) -> Part {
        let part = || {
            Part::bytes(self.bytes.to_vec()).file_name(self.resolved_filename().to_string())
        };
        match self.content_type.as_deref() {
            Some(ct) => part().mime_str(ct).unwrap_or_else(|_| part()),
            None => part(),
        }
    }
}

/// Single-shot client for the external inference endpoint. No retries.
#[derive(Clone)]
pub struct InferenceClient {
    http: reqwest::Client,
    url: String,
}

impl InferenceClient {
    pub fn new(config: &InferenceConfig) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .context("build inference http client")?;
        Ok(Self {
            http,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Forward `image` and return the upstream status with its decoded JSON object.
    pub async fn predict(
        &self,
        image: &UploadedImage,
    ) -> Result<(StatusCode, Map<String, Value>), ApiError> {
        let form = Form::new().part("file", image.to_part());

        let res = self
            .http
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, url = %self.url, "inference service unreachable");
                ApiError::InferenceUnavailable(e)
            })?;

        let status = res.status();
        let body = res.text().await.map_err(|e| {
            warn!(error = %e, url = %self.url, "inference response interrupted");
            ApiError::InferenceUnavailable(e)
        })?;

        if !status.is_success() || body.trim().is_empty() {
            warn!(%status, empty = body.trim().is_empty(), "inference service returned an invalid response");
            return Err(ApiError::InferenceInvalid);
        }

        let payload = serde_json::from_str::<Map<String, Value>>(&body).map_err(|e| {
            warn!(error = %e, "inference response is not a JSON object");
            ApiError::InferenceNotJson(e)
        })?;

        let status = StatusCode::from_u16(status.as_u16()).map_err(|_| ApiError::InferenceInvalid)?;
        debug!(%status, keys = payload.len(), "inference succeeded");
        Ok((status, payload))
    }
}
