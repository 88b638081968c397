//! OWhisper HTTP API client adapter

use std::error::Error as StdError;
use std::path::Path;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Url};

use crate::application::ports::{ApiError, TranscriptionApi};
use crate::domain::config::ClientConfig;
use crate::domain::envelope::ApiResponse;
use crate::domain::transcription::TranscribeOptions;

use super::multipart;

const STATUS_PATH: &str = "/api/status";
const MODEL_STATUS_PATH: &str = "/api/model/status";
const TRANSCRIBE_PATH: &str = "/api/transcribe";
const TASKS_PATH: &str = "/api/tasks";

/// Client for the OWhisper transcription service.
///
/// Cheap to clone; clones share the connection pool. Holds no mutable state,
/// so one instance can serve concurrent calls from many tasks.
#[derive(Debug, Clone)]
pub struct OWhisperClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl OWhisperClient {
    /// Create a client for the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| ApiError::RequestFailed(error_chain(&e)))?;

        Ok(Self { config, client })
    }

    /// Create a client resolving the address from `explicit` or the environment
    pub fn from_env(explicit: Option<&str>) -> Result<Self, ApiError> {
        Self::new(ClientConfig::from_env(explicit))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// URL for a task sub-resource, with the id encoded as one path segment
    fn task_url(&self, task_id: &str, action: Option<&str>) -> Result<Url, ApiError> {
        let mut url = Url::parse(&self.config.endpoint(TASKS_PATH))
            .map_err(|e| ApiError::RequestFailed(format!("Invalid base URL: {}", e)))?;
        {
            let mut segments = url.path_segments_mut().map_err(|_| {
                ApiError::RequestFailed(format!(
                    "Base URL cannot have path segments: {}",
                    self.config.base_url()
                ))
            })?;
            segments.push(task_id);
            if let Some(action) = action {
                segments.push(action);
            }
        }
        Ok(url)
    }

    /// Send one request and decode the envelope from its body.
    ///
    /// The HTTP status code is logged but not interpreted: the service
    /// answers 4xx/5xx with an error envelope too.
    async fn execute(&self, request: RequestBuilder) -> Result<ApiResponse, ApiError> {
        let response = request.send().await.map_err(|e| self.transport_error(e))?;

        let http_status = response.status();
        let url = response.url().to_string();
        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;

        tracing::debug!(%url, status = http_status.as_u16(), bytes = body.len(), "response received");

        ApiResponse::from_slice(&body)
            .map_err(|e| ApiError::Decode(format!("{} (HTTP {})", e, http_status)))
    }

    fn transport_error(&self, err: reqwest::Error) -> ApiError {
        if err.is_timeout() {
            tracing::debug!("request timed out after {:?}", self.config.timeout());
            ApiError::TimedOut(self.config.timeout())
        } else {
            tracing::debug!("request failed: {}", err);
            ApiError::RequestFailed(error_chain(&err))
        }
    }
}

#[async_trait]
impl TranscriptionApi for OWhisperClient {
    async fn status(&self) -> Result<ApiResponse, ApiError> {
        let url = self.config.endpoint(STATUS_PATH);
        tracing::debug!(%url, "GET status");
        self.execute(self.client.get(url)).await
    }

    async fn model_status(&self) -> Result<ApiResponse, ApiError> {
        let url = self.config.endpoint(MODEL_STATUS_PATH);
        tracing::debug!(%url, "GET model status");
        self.execute(self.client.get(url)).await
    }

    async fn transcribe_file(
        &self,
        path: &Path,
        options: TranscribeOptions,
    ) -> Result<ApiResponse, ApiError> {
        let form = multipart::file_form(path, options).await?;
        let url = self.config.endpoint(TRANSCRIBE_PATH);
        tracing::debug!(%url, file = %path.display(), "POST transcribe");
        self.execute(self.client.post(url).multipart(form)).await
    }

    async fn transcribe_bytes(
        &self,
        audio: Vec<u8>,
        file_name: &str,
        options: TranscribeOptions,
    ) -> Result<ApiResponse, ApiError> {
        let size = audio.len();
        let form = multipart::bytes_form(audio, file_name, options)?;
        let url = self.config.endpoint(TRANSCRIBE_PATH);
        tracing::debug!(%url, file_name, bytes = size, "POST transcribe");
        self.execute(self.client.post(url).multipart(form)).await
    }

    async fn list_tasks(&self) -> Result<ApiResponse, ApiError> {
        let url = self.config.endpoint(TASKS_PATH);
        tracing::debug!(%url, "GET tasks");
        self.execute(self.client.get(url)).await
    }

    async fn get_task(&self, task_id: &str) -> Result<ApiResponse, ApiError> {
        let url = self.task_url(task_id, None)?;
        tracing::debug!(%url, "GET task");
        self.execute(self.client.get(url)).await
    }

    async fn cancel_task(&self, task_id: &str) -> Result<ApiResponse, ApiError> {
        let url = self.task_url(task_id, Some("cancel"))?;
        tracing::debug!(%url, "POST cancel task");
        self.execute(self.client.post(url)).await
    }
}

/// Render an error with its sources, e.g. "error sending request: connection refused"
fn error_chain(err: &dyn StdError) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !out.contains(&text) {
            out.push_str(": ");
            out.push_str(&text);
        }
        source = cause.source();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> OWhisperClient {
        OWhisperClient::new(ClientConfig::resolve(Some(base), |_| None)).unwrap()
    }

    #[test]
    fn task_url_encodes_id_as_segment() {
        let client = client("http://localhost:11899/");
        let url = client.task_url("a b/c", None).unwrap();
        assert_eq!(url.as_str(), "http://localhost:11899/api/tasks/a%20b%2Fc");
    }

    #[test]
    fn task_url_with_action() {
        let client = client("http://localhost:11899");
        let url = client.task_url("42", Some("cancel")).unwrap();
        assert_eq!(url.as_str(), "http://localhost:11899/api/tasks/42/cancel");
    }

    #[test]
    fn task_url_keeps_base_path_prefix() {
        let client = client("http://gateway.local/owhisper/");
        let url = client.task_url("7", None).unwrap();
        assert_eq!(url.as_str(), "http://gateway.local/owhisper/api/tasks/7");
    }

    #[test]
    fn invalid_base_url_fails_at_request_time() {
        let client = client("not a url");
        let err = client.task_url("1", None).unwrap_err();
        assert!(err.is_transport());
    }

    #[test]
    fn client_keeps_config() {
        let client = client("http://example.test:1/");
        assert_eq!(client.config().base_url(), "http://example.test:1");
    }
}
