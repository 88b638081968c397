//! Model file status payload

use serde::{Deserialize, Serialize};

/// Payload of `/api/model/status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelStatus {
    #[serde(default)]
    pub exists: bool,
    #[serde(default)]
    pub valid: bool,
    /// Model file size in bytes
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub path: String,
}

impl ModelStatus {
    /// Whether the service can transcribe with its model
    pub fn is_ready(&self) -> bool {
        self.exists && self.valid
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size;
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else if bytes < 1024 * 1024 * 1024 {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        } else {
            format!("{:.1} GB", bytes as f64 / (1024.0 * 1024.0 * 1024.0))
        }
    }
}
