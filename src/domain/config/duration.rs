//! Duration value object

use std::fmt;
use std::str::FromStr;
use std::time::Duration as StdDuration;

use crate::domain::error::DurationParseError;

/// Default request timeout (30 minutes). Transcribing a long recording can
/// keep a single request open for a long time.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30 * 60;

/// Value object representing a time duration.
/// Immutable and validated on creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Duration {
    milliseconds: u64,
}

impl Duration {
    /// Create a Duration from milliseconds
    pub const fn from_millis(ms: u64) -> Self {
        Self { milliseconds: ms }
    }

    /// Create a Duration from seconds, saturating at `u64::MAX` milliseconds
    pub const fn from_secs(secs: u64) -> Self {
        Self {
            milliseconds: secs.saturating_mul(1000),
        }
    }

    /// Default request timeout
    pub const fn default_timeout() -> Self {
        Self::from_secs(DEFAULT_TIMEOUT_SECS)
    }

    /// Get duration in seconds
    pub const fn as_secs(&self) -> u64 {
        self.milliseconds / 1000
    }

    /// Get duration in milliseconds
    pub const fn as_millis(&self) -> u64 {
        self.milliseconds
    }

    /// Convert to std::time::Duration
    pub const fn as_std(&self) -> StdDuration {
        StdDuration::from_millis(self.milliseconds)
    }
}

impl From<StdDuration> for Duration {
    fn from(d: StdDuration) -> Self {
        Self::from_millis(u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
    }
}

impl FromStr for Duration {
    type Err = DurationParseError;

    /// Parse a duration string into a Duration value object.
    /// Supported formats: "90s", "30m", "1h", "1h30m", "2m30s"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim().to_lowercase();
        let invalid = || DurationParseError { input: s.to_string() };

        let mut total_secs: u64 = 0;
        let mut current_num = String::new();
        let mut found_any = false;

        for ch in input.chars() {
            if ch.is_ascii_digit() {
                current_num.push(ch);
                continue;
            }

            let unit_secs = match ch {
                'h' => 3600,
                'm' => 60,
                's' => 1,
                _ => return Err(invalid()),
            };
            if current_num.is_empty() {
                return Err(invalid());
            }

            let value: u64 = current_num.parse().map_err(|_| invalid())?;
            total_secs = value
                .checked_mul(unit_secs)
                .and_then(|v| total_secs.checked_add(v))
                .ok_or_else(invalid)?;
            current_num.clear();
            found_any = true;
        }

        // Leftover digits without a unit
        if !current_num.is_empty() || !found_any || total_secs == 0 {
            return Err(invalid());
        }

        let millis = total_secs.checked_mul(1000).ok_or_else(invalid)?;
        Ok(Self::from_millis(millis))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total_secs = self.as_secs();
        let hours = total_secs / 3600;
        let minutes = (total_secs % 3600) / 60;
        let seconds = total_secs % 60;

        if hours > 0 {
            write!(f, "{}h", hours)?;
        }
        if minutes > 0 {
            write!(f, "{}m", minutes)?;
        }
        if seconds > 0 || total_secs == 0 {
            write!(f, "{}s", seconds)?;
        }
        Ok(())
    }
}

impl Default for Duration {
    fn default() -> Self {
        Self::default_timeout()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_seconds_only() {
        let d: Duration = "90s".parse().unwrap();
        assert_eq!(d.as_secs(), 90);
        assert_eq!(d.as_millis(), 90000);
    }

    #[test]
    fn parse_minutes_only() {
        let d: Duration = "30m".parse().unwrap();
        assert_eq!(d.as_secs(), 1800);
    }

    #[test]
    fn parse_hours_and_minutes() {
        let d: Duration = "1h30m".parse().unwrap();
        assert_eq!(d.as_secs(), 5400);
    }

    #[test]
    fn parse_case_insensitive() {
        let d: Duration = "1M30S".parse().unwrap();
        assert_eq!(d.as_secs(), 90);
    }

    #[test]
    fn parse_with_whitespace() {
        let d: Duration = "  30s  ".parse().unwrap();
        assert_eq!(d.as_secs(), 30);
    }

    #[test]
    fn parse_invalid_empty() {
        assert!("".parse::<Duration>().is_err());
    }

    #[test]
    fn parse_invalid_zero() {
        assert!("0s".parse::<Duration>().is_err());
        assert!("0h0m".parse::<Duration>().is_err());
    }

    #[test]
    fn parse_invalid_format() {
        assert!("30".parse::<Duration>().is_err());
        assert!("abc".parse::<Duration>().is_err());
        assert!("30x".parse::<Duration>().is_err());
        assert!("m30".parse::<Duration>().is_err());
    }

    #[test]
    fn parse_rejects_values_beyond_millisecond_range() {
        assert!("18446744073709552s".parse::<Duration>().is_err());
        assert!("5124095576030432h".parse::<Duration>().is_err());
        assert!("99999999999999999999s".parse::<Duration>().is_err());
    }

    #[test]
    fn parse_accepts_largest_representable_seconds() {
        let d: Duration = "18446744073709551s".parse().unwrap();
        assert_eq!(d.as_secs(), 18_446_744_073_709_551);
    }

    #[test]
    fn from_std_saturates() {
        let d = Duration::from(StdDuration::from_secs(u64::MAX));
        assert_eq!(d.as_millis(), u64::MAX);
        assert_eq!(Duration::from_secs(u64::MAX).as_millis(), u64::MAX);
    }

    #[test]
    fn display_compound() {
        assert_eq!(Duration::from_secs(30).to_string(), "30s");
        assert_eq!(Duration::from_secs(1800).to_string(), "30m");
        assert_eq!(Duration::from_secs(5430).to_string(), "1h30m30s");
    }

    #[test]
    fn as_std_duration() {
        let d = Duration::from_secs(30);
        assert_eq!(d.as_std(), StdDuration::from_secs(30));
    }

    #[test]
    fn default_is_thirty_minutes() {
        assert_eq!(Duration::default().as_secs(), 1800);
    }
}
