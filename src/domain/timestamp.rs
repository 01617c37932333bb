//! ISO-8601 timestamps as found in the source export.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Timelike};
use std::fmt;
use std::str::FromStr;

/// A point in time parsed from an ISO-8601 string, keeping its original offset.
///
/// The source export writes timestamps like `2020-01-01T00:00:00.000Z`. Explicit
/// offsets are honoured, and a timestamp without any offset is taken as UTC.
///
/// # Examples
///
/// ```
/// use keepport::domain::Timestamp;
///
/// let ts: Timestamp = "2020-01-01T00:00:00Z".parse().unwrap();
/// assert_eq!(ts.as_micros(), 1_577_836_800_000_000);
/// assert_eq!(ts.to_iso_string(), "2020-01-01T00:00:00+00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp(DateTime<FixedOffset>);

/// Error returned when a timestamp string is not valid ISO-8601.
#[derive(Debug, Clone)]
pub struct ParseTimestampError(String);

impl fmt::Display for ParseTimestampError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid ISO-8601 timestamp '{}'", self.0)
    }
}

impl std::error::Error for ParseTimestampError {}

/// Layouts accepted for timestamps that carry no offset.
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

impl Timestamp {
    /// Parses an ISO-8601 timestamp.
    ///
    /// # Errors
    ///
    /// Returns `ParseTimestampError` if the input matches none of the accepted layouts.
    pub fn parse(s: &str) -> Result<Self, ParseTimestampError> {
        let trimmed = s.trim();

        if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self(dt));
        }

        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
                return Ok(Self(naive.and_utc().fixed_offset()));
            }
        }

        Err(ParseTimestampError(s.to_string()))
    }

    /// Microseconds since the Unix epoch.
    pub fn as_micros(&self) -> i64 {
        self.0.timestamp_micros()
    }

    /// Full ISO-8601 rendering in the timestamp's own offset.
    ///
    /// Fractional seconds are written with six digits, and only when the
    /// microsecond part is non-zero.
    pub fn to_iso_string(&self) -> String {
        if self.0.nanosecond() / 1_000 == 0 {
            self.0.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
        } else {
            self.0.format("%Y-%m-%dT%H:%M:%S%.6f%:z").to_string()
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl FromStr for Timestamp {
    type Err = ParseTimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
