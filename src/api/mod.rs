//! HTTP client for the AutoNotes backend.
//!
//! Wraps the four backend endpoints: the health probe, the two
//! generate-notes routes (YouTube URL and file upload), and export.
//! Failed responses are reduced to a single display string taken from the
//! backend's `detail` field when present.

pub mod models;

use crate::config::BackendSettings;
use crate::error::{AutonotesError, Result};
use models::{ErrorBody, ExportFormat, ExportRequest, GenerateResponse, Notes};
use reqwest::multipart;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Client for the AutoNotes backend API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    health_timeout: Duration,
}

impl ApiClient {
    /// Create a client from backend settings, validating the base URL.
    pub fn new(settings: &BackendSettings) -> Result<Self> {
        let base_url = settings.base_url.trim().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|e| {
            AutonotesError::Config(format!("Invalid backend URL '{}': {}", settings.base_url, e))
        })?;

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            health_timeout: Duration::from_secs(settings.health_timeout_secs),
        })
    }

    /// The normalized base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Probe backend reachability. The response body is ignored; only a
    /// successful status counts.
    pub async fn health(&self) -> Result<()> {
        let url = self.endpoint("/");
        debug!("Probing backend at {}", url);

        let response = self
            .http
            .get(&url)
            .timeout(self.health_timeout)
            .send()
            .await
            .map_err(|e| {
                debug!("Health probe failed: {}", e);
                AutonotesError::BackendUnreachable(self.base_url.clone())
            })?;

        if response.status().is_success() {
            Ok(())
        } else {
            debug!("Health probe returned status {}", response.status());
            Err(AutonotesError::BackendUnreachable(self.base_url.clone()))
        }
    }

    /// Generate notes from a YouTube video URL.
    #[instrument(skip(self), fields(url = %url))]
    pub async fn generate_from_youtube(&self, url: &str) -> Result<GenerateResponse> {
        let response = self
            .http
            .post(self.endpoint("/api/generate-notes/youtube"))
            .json(&serde_json::json!({ "url": url }))
            .send()
            .await?;

        Self::parse_generate(response).await
    }

    /// Generate notes from a local media file, sent as a multipart upload
    /// under the `file` field.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub async fn generate_from_upload(&self, path: &Path) -> Result<GenerateResponse> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();
        let bytes = tokio::fs::read(path).await?;
        debug!("Uploading {} ({} bytes)", file_name, bytes.len());

        let part = multipart::Part::bytes(bytes).file_name(file_name);
        let form = multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.endpoint("/api/generate-notes/upload"))
            .multipart(form)
            .send()
            .await?;

        Self::parse_generate(response).await
    }

    /// Render the given transcript and notes through the backend and return
    /// the raw document bytes.
    #[instrument(skip(self, transcript, notes))]
    pub async fn export(
        &self,
        format: ExportFormat,
        transcript: &str,
        notes: &Notes,
    ) -> Result<Vec<u8>> {
        let response = self
            .http
            .post(self.endpoint(&format!("/api/export/{}", format)))
            .json(&ExportRequest { transcript, notes })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::reduce_error(response).await);
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn parse_generate(response: reqwest::Response) -> Result<GenerateResponse> {
        if !response.status().is_success() {
            return Err(Self::reduce_error(response).await);
        }

        let body: GenerateResponse = response.json().await?;
        if !body.success {
            return Err(AutonotesError::Backend(
                "The backend reported an unsuccessful result".to_string(),
            ));
        }
        Ok(body)
    }

    /// Reduce a failed response to one display string: the backend's
    /// `detail` field when the body parses, a status line otherwise.
    async fn reduce_error(response: reqwest::Response) -> AutonotesError {
        let status = response.status();
        let text = response.text().await.unwrap_or_default();

        if let Ok(body) = serde_json::from_str::<ErrorBody>(&text) {
            return AutonotesError::Backend(body.detail);
        }

        AutonotesError::Backend(format!("Request failed with status {}", status))
    }
}
