//! Upload metadata

use std::path::Path;

/// Name of the multipart field carrying the audio file
pub const FILE_FIELD: &str = "file";

/// Name of the optional text field toggling voice activity detection
pub const VAD_FIELD: &str = "enable_vad";

/// File name used when a path has no usable final component
pub const FALLBACK_FILE_NAME: &str = "audio";

/// Per-request transcription options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscribeOptions {
    /// Ask the service to enable or disable VAD. `None` keeps its default.
    pub enable_vad: Option<bool>,
}

impl TranscribeOptions {
    pub fn with_vad(enable: bool) -> Self {
        Self {
            enable_vad: Some(enable),
        }
    }
}

/// Base name sent as the multipart file name
pub fn upload_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .filter(|n| !n.is_empty())
        .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string())
}
