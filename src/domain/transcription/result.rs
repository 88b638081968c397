//! Transcription result payload

use std::time::Duration as StdDuration;

use serde::{Deserialize, Serialize};

/// Payload of a successful transcription envelope.
///
/// Field names on the wire are case-sensitive PascalCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    /// Full transcript
    #[serde(rename = "Text")]
    pub text: String,

    /// Subtitles in SRT format
    #[serde(rename = "SrtContent", default)]
    pub srt_content: String,

    /// Server-side processing time in seconds
    #[serde(rename = "ProcessingTime", default)]
    pub processing_time: f64,
}

impl TranscriptionResult {
    /// Processing time as a duration; negative or non-finite values read as zero
    pub fn processing_duration(&self) -> StdDuration {
        if self.processing_time.is_finite() && self.processing_time > 0.0 {
            StdDuration::try_from_secs_f64(self.processing_time).unwrap_or(StdDuration::MAX)
        } else {
            StdDuration::ZERO
        }
    }

    /// Whether the service produced subtitles
    pub fn has_subtitles(&self) -> bool {
        !self.srt_content.trim().is_empty()
    }
}
