//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with the OWhisper HTTP API and the config file.

pub mod config;
pub mod http;

// Re-export adapters
pub use config::XdgConfigStore;
pub use http::OWhisperClient;
