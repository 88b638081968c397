//! Domain error types

use thiserror::Error;

/// Error when parsing a duration string
#[derive(Debug, Clone, Error)]
#[error("Invalid duration format: \"{input}\". Expected format: <number>h, <number>m, <number>s or a combination (e.g., 90s, 30m, 1h30m)")]
pub struct DurationParseError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}

/// A well-formed envelope whose status is `error`.
///
/// The HTTP exchange itself succeeded; the service is reporting a failure
/// of its own. Code and message are passed through verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{}", display_service_error(.code.as_deref(), .message))]
pub struct ServiceError {
    pub code: Option<String>,
    pub message: String,
}

fn display_service_error(code: Option<&str>, message: &str) -> String {
    match code {
        Some(code) => format!("Service error [{}]: {}", code, message),
        None => format!("Service error: {}", message),
    }
}

/// Error when extracting a typed payload from an envelope
#[derive(Debug, Clone, Error)]
pub enum PayloadError {
    #[error(transparent)]
    Service(#[from] ServiceError),

    #[error("Unexpected payload shape: {0}")]
    Decode(String),
}

/// Error when a response body is not a valid envelope
#[derive(Debug, Clone, Error)]
pub enum EnvelopeError {
    #[error("Response is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Unknown envelope status: \"{0}\"")]
    UnknownStatus(String),

    #[error("Malformed envelope: {0}")]
    Malformed(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_error_display_with_code() {
        let err = ServiceError {
            code: Some("NO_FILE_UPLOADED".to_string()),
            message: "Please upload an audio file".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Service error [NO_FILE_UPLOADED]: Please upload an audio file"
        );
    }

    #[test]
    fn service_error_display_without_code() {
        let err = ServiceError {
            code: None,
            message: "boom".to_string(),
        };
        assert_eq!(err.to_string(), "Service error: boom");
    }

    #[test]
    fn payload_error_is_transparent_for_service() {
        let err = PayloadError::from(ServiceError {
            code: Some("X".to_string()),
            message: "y".to_string(),
        });
        assert_eq!(err.to_string(), "Service error [X]: y");
    }
}
