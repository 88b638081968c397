//! Client connection configuration

use std::time::Duration as StdDuration;

use super::duration::Duration;

/// Environment variable selecting the service host
pub const HOST_ENV: &str = "OWHISPER_HOST";

/// Environment variable selecting the service port
pub const PORT_ENV: &str = "OWHISPER_PORT";

/// Host used when `OWHISPER_HOST` is not set
pub const DEFAULT_HOST: &str = "localhost";

/// Port used when `OWHISPER_PORT` is not set
pub const DEFAULT_PORT: &str = "11899";

/// Resolved connection settings for the transcription service.
///
/// The base URL never ends with a slash, so API paths can be appended
/// directly. Host and port are not validated here; a bad address shows up
/// as a transport error on the first request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    timeout: Duration,
}

impl ClientConfig {
    /// Resolve the base URL from an explicit value or an environment lookup.
    ///
    /// A non-empty `explicit` address wins. Otherwise host and port come from
    /// `env` (empty values count as unset) with `localhost:11899` as fallback.
    pub fn resolve<F>(explicit: Option<&str>, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = match explicit.filter(|s| !s.is_empty()) {
            Some(url) => url.to_string(),
            None => {
                let lookup = |key: &str, default: &str| {
                    env(key)
                        .filter(|v| !v.is_empty())
                        .unwrap_or_else(|| default.to_string())
                };
                format!(
                    "http://{}:{}",
                    lookup(HOST_ENV, DEFAULT_HOST),
                    lookup(PORT_ENV, DEFAULT_PORT)
                )
            }
        };

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout: Duration::default_timeout(),
        }
    }

    /// Resolve against the process environment
    pub fn from_env(explicit: Option<&str>) -> Self {
        Self::resolve(explicit, |key| std::env::var(key).ok())
    }

    /// Replace the request timeout
    pub fn with_timeout(mut self, timeout: impl Into<Duration>) -> Self {
        self.timeout = timeout.into();
        self
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Per-request timeout
    pub fn timeout(&self) -> StdDuration {
        self.timeout.as_std()
    }

    /// Join an API path (starting with `/`) onto the base URL
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::resolve(None, |_| None)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_explicit_or_env() {
        let config = ClientConfig::resolve(None, |_| None);
        assert_eq!(config.base_url(), "http://localhost:11899");
    }

    #[test]
    fn explicit_address_wins_over_env() {
        let env = env_from(&[(HOST_ENV, "remote"), (PORT_ENV, "1")]);
        let config = ClientConfig::resolve(Some("http://10.0.0.5:9000"), env);
        assert_eq!(config.base_url(), "http://10.0.0.5:9000");
    }

    #[test]
    fn empty_explicit_falls_back_to_env() {
        let env = env_from(&[(HOST_ENV, "whisper.lan"), (PORT_ENV, "8080")]);
        let config = ClientConfig::resolve(Some(""), env);
        assert_eq!(config.base_url(), "http://whisper.lan:8080");
    }

    #[test]
    fn partial_env_uses_default_for_missing_part() {
        let config = ClientConfig::resolve(None, env_from(&[(PORT_ENV, "9999")]));
        assert_eq!(config.base_url(), "http://localhost:9999");

        let config = ClientConfig::resolve(None, env_from(&[(HOST_ENV, "box")]));
        assert_eq!(config.base_url(), "http://box:11899");
    }

    #[test]
    fn empty_env_values_count_as_unset() {
        let env = env_from(&[(HOST_ENV, ""), (PORT_ENV, "")]);
        let config = ClientConfig::resolve(None, env);
        assert_eq!(config.base_url(), "http://localhost:11899");
    }

    #[test]
    fn trailing_slashes_are_stripped() {
        for input in ["http://host:1", "http://host:1/", "http://host:1///"] {
            let config = ClientConfig::resolve(Some(input), |_| None);
            assert_eq!(config.base_url(), "http://host:1");
            assert_eq!(config.endpoint("/api/status"), "http://host:1/api/status");
            assert_eq!(
                config.endpoint("/api/transcribe"),
                "http://host:1/api/transcribe"
            );
        }
    }

    #[test]
    fn malformed_address_is_not_rejected() {
        let config = ClientConfig::resolve(Some("not a url"), |_| None);
        assert_eq!(config.base_url(), "not a url");
    }

    #[test]
    fn default_timeout_is_thirty_minutes() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout(), StdDuration::from_secs(1800));
    }

    #[test]
    fn with_timeout_overrides() {
        let config = ClientConfig::default().with_timeout(StdDuration::from_millis(250));
        assert_eq!(config.timeout(), StdDuration::from_millis(250));
    }
}
