//! Domain layer - Core value objects
//!
//! Contains the response envelope, typed payloads, configuration values,
//! and domain errors. This layer has no dependencies on external systems.

pub mod config;
pub mod envelope;
pub mod error;
pub mod transcription;

// Re-export common types
pub use config::{AppConfig, ClientConfig, Duration};
pub use envelope::{ApiResponse, ResponseStatus};
pub use error::*;
pub use transcription::{
    AudioContentType, ModelStatus, TaskCreation, TaskList, TaskStatus, TaskSummary,
    TranscribeOptions, TranscriptionResult,
};
