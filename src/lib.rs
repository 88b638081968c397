//! OWhisper client - talk to an OWhisper transcription service over HTTP
//!
//! This crate queries service status and uploads audio files for
//! transcription, decoding the service's uniform response envelope into
//! typed results.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Envelope, payloads, configuration values, and errors
//! - **Application**: The `TranscriptionApi` port and the transcribe use case
//! - **Infrastructure**: reqwest HTTP adapter and the XDG config store
//! - **CLI**: Command-line interface and output formatting
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use owhisper_client::application::ports::TranscriptionApi;
//! use owhisper_client::domain::{TranscribeOptions, TranscriptionResult};
//! use owhisper_client::infrastructure::OWhisperClient;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OWhisperClient::from_env(None)?;
//! let envelope = client
//!     .transcribe_file(Path::new("audio.mp3"), TranscribeOptions::default())
//!     .await?;
//! let result: TranscriptionResult = envelope.decode_data()?;
//! println!("{}", result.text);
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
