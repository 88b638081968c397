//! Transcription service port interface

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::envelope::ApiResponse;
use crate::domain::transcription::TranscribeOptions;

/// Errors raised while performing a single API call.
///
/// A service-reported failure is not one of these: it arrives as a
/// successfully decoded [`ApiResponse`] with status `error`.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Failed to read audio file '{path}': {message}")]
    FileRead { path: String, message: String },

    #[error("API request failed: {0}")]
    RequestFailed(String),

    #[error("API request timed out after {0:?}")]
    TimedOut(Duration),

    #[error("Failed to decode API response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Whether the service could not be reached or did not answer in time
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::RequestFailed(_) | Self::TimedOut(_))
    }
}

/// Port for the remote transcription service.
///
/// Every method issues exactly one request and never retries.
#[async_trait]
pub trait TranscriptionApi: Send + Sync {
    /// Query `/api/status`
    async fn status(&self) -> Result<ApiResponse, ApiError>;

    /// Query `/api/model/status`
    async fn model_status(&self) -> Result<ApiResponse, ApiError>;

    /// Upload a file from disk for transcription.
    ///
    /// The file is opened before any network activity, so an unreadable
    /// path fails with [`ApiError::FileRead`] without contacting the service.
    async fn transcribe_file(
        &self,
        path: &Path,
        options: TranscribeOptions,
    ) -> Result<ApiResponse, ApiError>;

    /// Upload in-memory audio for transcription
    async fn transcribe_bytes(
        &self,
        audio: Vec<u8>,
        file_name: &str,
        options: TranscribeOptions,
    ) -> Result<ApiResponse, ApiError>;

    /// Query `/api/tasks`
    async fn list_tasks(&self) -> Result<ApiResponse, ApiError>;

    /// Query `/api/tasks/{id}`
    async fn get_task(&self, task_id: &str) -> Result<ApiResponse, ApiError>;

    /// Request cancellation via `/api/tasks/{id}/cancel`
    async fn cancel_task(&self, task_id: &str) -> Result<ApiResponse, ApiError>;
}
