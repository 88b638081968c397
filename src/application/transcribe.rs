//! Transcribe file use case

use std::path::Path;

use thiserror::Error;

use crate::domain::error::{PayloadError, ServiceError};
use crate::domain::transcription::{TaskCreation, TranscribeOptions, TranscriptionResult};

use super::ports::{ApiError, TranscriptionApi};

/// Errors from the transcribe use case
#[derive(Debug, Error)]
pub enum TranscribeError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Transcription failed: {0}")]
    Service(ServiceError),

    #[error("Unexpected transcription payload: {0}")]
    Payload(String),
}

impl From<PayloadError> for TranscribeError {
    fn from(err: PayloadError) -> Self {
        match err {
            PayloadError::Service(e) => Self::Service(e),
            PayloadError::Decode(msg) => Self::Payload(msg),
        }
    }
}

/// What the service did with an upload
#[derive(Debug, Clone, PartialEq)]
pub enum TranscribeOutcome {
    /// Transcript returned inline
    Completed(TranscriptionResult),
    /// Upload queued; fetch the result later with `get_task`
    Queued(TaskCreation),
}

/// Uploads one file and returns the typed transcript or the queued task.
///
/// Wraps the envelope-level port call with the second decode stage.
pub struct TranscribeFileUseCase<A: TranscriptionApi> {
    api: A,
}

impl<A: TranscriptionApi> TranscribeFileUseCase<A> {
    /// Create a new use case instance
    pub fn new(api: A) -> Self {
        Self { api }
    }

    /// Execute the transcription
    pub async fn execute(
        &self,
        path: &Path,
        options: TranscribeOptions,
    ) -> Result<TranscribeOutcome, TranscribeError> {
        let envelope = self.api.transcribe_file(path, options).await?;

        if let Some(err) = envelope.service_error() {
            tracing::warn!(
                code = err.code.as_deref().unwrap_or("-"),
                "service rejected {}: {}",
                path.display(),
                err.message
            );
        }

        let result = match envelope.decode_data::<TranscriptionResult>() {
            Ok(result) => result,
            Err(PayloadError::Decode(message)) => {
                // Queue-backed servers answer with a task handle
                return match envelope.decode_data::<TaskCreation>() {
                    Ok(task) => {
                        tracing::debug!(
                            task_id = %task.task_id,
                            queue_position = task.queue_position,
                            "transcription queued"
                        );
                        Ok(TranscribeOutcome::Queued(task))
                    }
                    Err(_) => Err(TranscribeError::Payload(message)),
                };
            }
            Err(e) => return Err(e.into()),
        };

        tracing::debug!(
            chars = result.text.chars().count(),
            processing_time = result.processing_time,
            "transcription decoded"
        );
        Ok(TranscribeOutcome::Completed(result))
    }
}
