//! Queue task payloads

use std::fmt;

use serde::{Deserialize, Serialize};

use super::result::TranscriptionResult;

/// Lifecycle state of a queued transcription task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TaskStatus {
    Queued,
    Processing,
    Completed,
    Failed,
    Cancelled,
    /// Any status this client does not recognise
    #[default]
    #[serde(other)]
    Unknown,
}

impl TaskStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Queued => "Queued",
            Self::Processing => "Processing",
            Self::Completed => "Completed",
            Self::Failed => "Failed",
            Self::Cancelled => "Cancelled",
        }
    }

    /// Whether the task will not change state anymore
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Failed | Self::Cancelled)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One task as reported by `/api/tasks` and `/api/tasks/{id}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSummary {
    pub id: String,
    #[serde(default)]
    pub file_name: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub progress: f32,
    #[serde(default)]
    pub queue_position: i64,
    pub created_at: Option<String>,
    pub started_at: Option<String>,
    pub completed_at: Option<String>,
    pub error_message: Option<String>,
    /// Only present on the single-task endpoint once the task completed
    pub result: Option<TranscriptionResult>,
}

/// Payload of `/api/tasks`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskList {
    #[serde(default)]
    pub tasks: Vec<TaskSummary>,
    #[serde(default)]
    pub queue_length: u64,
}

/// Payload of `/api/transcribe` when the service queues the upload
/// instead of answering with the transcript
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCreation {
    #[serde(rename = "TaskId")]
    pub task_id: String,
    #[serde(rename = "QueuePosition", default)]
    pub queue_position: u64,
}

/// Payload of `/api/tasks/{id}/cancel`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelAck {
    #[serde(default)]
    pub message: String,
}
