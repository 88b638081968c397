//! Application configuration value object

use serde::{Deserialize, Serialize};

use super::duration::Duration;
use crate::domain::error::DurationParseError;

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub base_url: Option<String>,
    pub timeout: Option<String>,
}

impl AppConfig {
    /// Create config with default values.
    ///
    /// `base_url` stays unset so environment fallback still applies.
    pub fn defaults() -> Self {
        Self {
            base_url: None,
            timeout: Some(Duration::default_timeout().to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            base_url: other.base_url.or(self.base_url),
            timeout: other.timeout.or(self.timeout),
        }
    }

    /// Parse the configured timeout, falling back to the default when unset
    pub fn parsed_timeout(&self) -> Result<Duration, DurationParseError> {
        match self.timeout.as_deref() {
            Some(s) => s.parse(),
            None => Ok(Duration::default_timeout()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_have_expected_values() {
        let config = AppConfig::defaults();
        assert!(config.base_url.is_none());
        assert_eq!(config.timeout, Some("30m".to_string()));
    }

    #[test]
    fn merge_other_takes_precedence() {
        let base = AppConfig {
            base_url: Some("http://file:1".to_string()),
            timeout: Some("10m".to_string()),
        };
        let other = AppConfig {
            base_url: Some("http://cli:2".to_string()),
            timeout: None,
        };

        let merged = base.merge(other);
        assert_eq!(merged.base_url, Some("http://cli:2".to_string()));
        assert_eq!(merged.timeout, Some("10m".to_string()));
    }

    #[test]
    fn parsed_timeout_reads_value() {
        let config = AppConfig {
            timeout: Some("1h".to_string()),
            ..Default::default()
        };
        assert_eq!(config.parsed_timeout().unwrap().as_secs(), 3600);
    }

    #[test]
    fn parsed_timeout_defaults_when_unset() {
        assert_eq!(AppConfig::empty().parsed_timeout().unwrap().as_secs(), 1800);
    }

    #[test]
    fn parsed_timeout_rejects_invalid() {
        let config = AppConfig {
            timeout: Some("soon".to_string()),
            ..Default::default()
        };
        let err = config.parsed_timeout().unwrap_err();
        assert_eq!(err.input, "soon");
    }
}
