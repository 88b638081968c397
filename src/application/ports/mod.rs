//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod config;
pub mod transcription_api;

// Re-export common types
pub use config::ConfigStore;
pub use transcription_api::{ApiError, TranscriptionApi};
