//! Response envelope shared by every service endpoint
//!
//! Decoding is two-stage: the envelope is decoded into [`ApiResponse`]
//! first, and the operation-specific payload in `Data` is decoded second
//! with [`ApiResponse::decode_data`].

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::error::{EnvelopeError, PayloadError, ServiceError};

/// Envelope status, carried on the wire as `"success"` or `"error"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResponseStatus {
    Success,
    Error,
}

impl ResponseStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl FromStr for ResponseStatus {
    type Err = EnvelopeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("success") {
            Ok(Self::Success)
        } else if s.eq_ignore_ascii_case("error") {
            Ok(Self::Error)
        } else {
            Err(EnvelopeError::UnknownStatus(s.to_string()))
        }
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// Wire shape before validation

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct RawEnvelope {
    status: Option<String>,
    data: Option<Value>,
    error: Option<String>,
    error_code: Option<String>,
}

/// Validated response envelope.
///
/// A success envelope always carries data and no error text; an error
/// envelope always carries a non-empty message and no data.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiResponse {
    status: ResponseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error_code: Option<String>,
}

impl ApiResponse {
    /// Build a success envelope
    pub fn success(data: Value) -> Self {
        Self {
            status: ResponseStatus::Success,
            data: Some(data),
            error: None,
            error_code: None,
        }
    }

    /// Build an error envelope
    pub fn failure(code: Option<String>, message: impl Into<String>) -> Self {
        Self {
            status: ResponseStatus::Error,
            data: None,
            error: Some(message.into()),
            error_code: code,
        }
    }

    /// Decode and validate an envelope from a response body
    pub fn from_slice(body: &[u8]) -> Result<Self, EnvelopeError> {
        let raw: RawEnvelope = serde_json::from_slice(body)
            .map_err(|e| EnvelopeError::InvalidJson(e.to_string()))?;
        Self::validate(raw)
    }

    fn validate(raw: RawEnvelope) -> Result<Self, EnvelopeError> {
        let status: ResponseStatus = raw
            .status
            .as_deref()
            .ok_or(EnvelopeError::Malformed("missing Status field"))?
            .parse()?;

        match status {
            ResponseStatus::Success => {
                let data = raw
                    .data
                    .ok_or(EnvelopeError::Malformed("success envelope without Data"))?;
                Ok(Self::success(data))
            }
            ResponseStatus::Error => {
                let message = raw
                    .error
                    .filter(|m| !m.is_empty())
                    .ok_or(EnvelopeError::Malformed("error envelope without Error message"))?;
                let code = raw.error_code.filter(|c| !c.is_empty());
                Ok(Self::failure(code, message))
            }
        }
    }

    pub fn status(&self) -> ResponseStatus {
        self.status
    }

    pub fn is_success(&self) -> bool {
        self.status == ResponseStatus::Success
    }

    /// Raw payload, present only on success
    pub fn data(&self) -> Option<&Value> {
        self.data.as_ref()
    }

    /// Human-readable error, present only on error
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Machine-readable error code, optional even on error
    pub fn error_code(&self) -> Option<&str> {
        self.error_code.as_deref()
    }

    /// The service-reported error, if this is an error envelope
    pub fn service_error(&self) -> Option<ServiceError> {
        match self.status {
            ResponseStatus::Success => None,
            ResponseStatus::Error => Some(ServiceError {
                code: self.error_code.clone(),
                message: self.error.clone().unwrap_or_default(),
            }),
        }
    }

    /// Take the raw payload, or the service error
    pub fn into_data(self) -> Result<Value, ServiceError> {
        match (self.status, self.data) {
            (ResponseStatus::Success, Some(data)) => Ok(data),
            (_, _) => Err(ServiceError {
                code: self.error_code,
                message: self.error.unwrap_or_default(),
            }),
        }
    }

    /// Second-stage decode of the payload into an operation-specific type
    pub fn decode_data<T: DeserializeOwned>(&self) -> Result<T, PayloadError> {
        if let Some(err) = self.service_error() {
            return Err(PayloadError::Service(err));
        }
        let data = self.data.as_ref().unwrap_or(&Value::Null);
        T::deserialize(data).map_err(|e| PayloadError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_envelope_exposes_data_unchanged() {
        let body = br#"{"Status":"success","Data":{"service":"OWhisper.NET API","n":[1,2]}}"#;
        let envelope = ApiResponse::from_slice(body).unwrap();

        assert!(envelope.is_success());
        assert_eq!(
            envelope.data(),
            Some(&json!({"service": "OWhisper.NET API", "n": [1, 2]}))
        );
        assert!(envelope.error().is_none());
        assert!(envelope.error_code().is_none());
    }

    #[test]
    fn error_envelope_exposes_message_and_code() {
        let body = br#"{"Status":"error","Data":null,"Error":"Unsupported format","ErrorCode":"UNSUPPORTED_FILE_FORMAT"}"#;
        let envelope = ApiResponse::from_slice(body).unwrap();

        assert_eq!(envelope.status(), ResponseStatus::Error);
        assert_eq!(envelope.error(), Some("Unsupported format"));
        assert_eq!(envelope.error_code(), Some("UNSUPPORTED_FILE_FORMAT"));
        assert!(envelope.data().is_none());
    }

    #[test]
    fn error_envelope_drops_data() {
        let body = br#"{"Status":"error","Data":{"x":1},"Error":"nope"}"#;
        let envelope = ApiResponse::from_slice(body).unwrap();
        assert!(envelope.data().is_none());
        assert!(envelope.error_code().is_none());
    }

    #[test]
    fn success_envelope_drops_error_fields() {
        let body = br#"{"Status":"success","Data":1,"Error":"","ErrorCode":"STALE"}"#;
        let envelope = ApiResponse::from_slice(body).unwrap();
        assert!(envelope.error().is_none());
        assert!(envelope.error_code().is_none());
    }

    #[test]
    fn status_is_case_insensitive() {
        let envelope = ApiResponse::from_slice(br#"{"Status":"Success","Data":true}"#).unwrap();
        assert!(envelope.is_success());
    }

    #[test]
    fn invalid_json_is_decode_error() {
        let err = ApiResponse::from_slice(b"<html>502 Bad Gateway</html>").unwrap_err();
        assert!(matches!(err, EnvelopeError::InvalidJson(_)));
    }

    #[test]
    fn unknown_status_is_decode_error() {
        let err = ApiResponse::from_slice(br#"{"Status":"pending","Data":{}}"#).unwrap_err();
        assert!(matches!(err, EnvelopeError::UnknownStatus(s) if s == "pending"));
    }

    #[test]
    fn missing_status_is_decode_error() {
        let err = ApiResponse::from_slice(br#"{"Data":{}}"#).unwrap_err();
        assert!(matches!(err, EnvelopeError::Malformed(_)));
    }

    #[test]
    fn success_without_data_or_error_is_decode_error() {
        let err = ApiResponse::from_slice(br#"{"Status":"success"}"#).unwrap_err();
        assert!(matches!(err, EnvelopeError::Malformed(_)));

        let err = ApiResponse::from_slice(br#"{"Status":"success","Data":null}"#).unwrap_err();
        assert!(matches!(err, EnvelopeError::Malformed(_)));
    }

    #[test]
    fn error_without_message_is_decode_error() {
        let err = ApiResponse::from_slice(br#"{"Status":"error","ErrorCode":"X"}"#).unwrap_err();
        assert!(matches!(err, EnvelopeError::Malformed(_)));

        let err = ApiResponse::from_slice(br#"{"Status":"error","Error":""}"#).unwrap_err();
        assert!(matches!(err, EnvelopeError::Malformed(_)));
    }

    #[test]
    fn non_object_body_is_decode_error() {
        assert!(ApiResponse::from_slice(b"[]").is_err());
        assert!(ApiResponse::from_slice(b"\"success\"").is_err());
    }

    #[test]
    fn into_data_returns_service_error() {
        let envelope = ApiResponse::failure(Some("TASK_NOT_FOUND".into()), "missing");
        let err = envelope.into_data().unwrap_err();
        assert_eq!(err.code.as_deref(), Some("TASK_NOT_FOUND"));
        assert_eq!(err.message, "missing");
    }

    #[test]
    fn decode_data_into_typed_payload() {
        #[derive(Debug, Deserialize)]
        struct Probe {
            value: u32,
        }

        let envelope = ApiResponse::success(json!({"value": 7}));
        let probe: Probe = envelope.decode_data().unwrap();
        assert_eq!(probe.value, 7);

        let err = envelope.decode_data::<Vec<String>>().unwrap_err();
        assert!(matches!(err, PayloadError::Decode(_)));
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let envelope = ApiResponse::failure(Some("E".into()), "bad");
        let value = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            value,
            json!({"Status": "error", "Error": "bad", "ErrorCode": "E"})
        );
    }
}
