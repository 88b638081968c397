//! Audio content type lookup

use std::fmt;
use std::path::Path;

/// Content type advertised in the multipart file part.
///
/// Advisory only: an unknown extension still uploads, tagged as
/// `application/octet-stream`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioContentType {
    Mpeg,
    Wav,
    Aac,
    OctetStream,
}

impl AudioContentType {
    /// Look up the content type for a file extension (without the dot)
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "mp3" => Self::Mpeg,
            "wav" => Self::Wav,
            "aac" | "m4a" => Self::Aac,
            _ => Self::OctetStream,
        }
    }

    /// Look up the content type from a path or file name
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(Self::from_extension)
            .unwrap_or_default()
    }

    /// Get the MIME type string
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Mpeg => "audio/mpeg",
            Self::Wav => "audio/wav",
            Self::Aac => "audio/aac",
            Self::OctetStream => "application/octet-stream",
        }
    }
}

impl fmt::Display for AudioContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Default for AudioContentType {
    fn default() -> Self {
        Self::OctetStream
    }
}
