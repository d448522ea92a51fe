//! Utilities for parsing and formatting RFC 3339 timestamps.
//!
//! The [`Timestamp`] newtype wraps `chrono::DateTime<Utc>`.
//!
//! # Parsing RFC 3339 string
//! ```
//! # use chat_events::model::Timestamp;
//! #
//! let timestamp = Timestamp::parse("2020-07-21T14:47:57Z").unwrap();
//! let timestamp = Timestamp::parse("2020-07-21T14:47:57+00:00").unwrap();
//! let timestamp = Timestamp::parse("2020-07-21T14:47:57.896574Z").unwrap();
//!
//! let timestamp: Timestamp = "2020-07-21T14:47:57Z".parse().unwrap();
//!
//! assert!(Timestamp::parse("2020-07-21T14:47:57").is_err());
//! assert!(Timestamp::parse("2020-07-21T14:47").is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, ParseError as InnerError, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Representation of a Unix timestamp.
///
/// The struct implements the `std::fmt::Display` trait to format the underlying type as an RFC
/// 3339 date and string such as `2020-07-21T14:47:57.896Z`.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Deserialize, Serialize, Ord, PartialOrd, Hash)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a new `Timestamp` with the current date and time in UTC.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Create a new `Timestamp` from a UNIX timestamp.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the value is invalid.
    pub fn from_unix_timestamp(secs: i64) -> Result<Self, InvalidTimestamp> {
        Utc.timestamp_opt(secs, 0).single().map(Self).ok_or(InvalidTimestamp)
    }

    /// Returns the number of non-leap seconds since January 1, 1970 0:00:00 UTC
    #[must_use]
    pub fn unix_timestamp(&self) -> i64 {
        self.0.timestamp()
    }

    /// Parse a timestamp from an RFC 3339 date and time string.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the string is not a valid RFC 3339 date and time string.
    pub fn parse(input: &str) -> Result<Timestamp, ParseError> {
        DateTime::parse_from_rfc3339(input)
            .map(|d| Self(d.with_timezone(&Utc)))
            .map_err(ParseError)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.0.to_rfc3339_opts(SecondsFormat::Millis, true);
        f.write_str(&s)
    }
}

impl std::ops::Deref for Timestamp {
    type Target = DateTime<Utc>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(dt: DateTime<Tz>) -> Self {
        Self(dt.with_timezone(&Utc))
    }
}

impl FromStr for Timestamp {
    type Err = ParseError;

    /// Parses an RFC 3339 date and time string such as `2020-07-21T14:47:57.896Z`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timestamp::parse(s)
    }
}

/// Signifies the failure to construct a `Timestamp` struct.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InvalidTimestamp;

impl std::error::Error for InvalidTimestamp {}

impl fmt::Display for InvalidTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("invalid UNIX timestamp value")
    }
}

/// Signifies the failure to parse the `Timestamp` from an RFC 3339 string.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ParseError(InnerError);

impl std::error::Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::Timestamp;
    use crate::json::{from_value, json};

    #[test]
    fn parse() {
        let timestamp = Timestamp::parse("2020-07-21T14:47:57.896574Z").unwrap();
        assert_eq!(timestamp.unix_timestamp(), 1_595_342_877);
        assert_eq!(timestamp.to_string(), "2020-07-21T14:47:57.896Z");

        let offset = Timestamp::parse("2020-07-21T16:47:57.896574+02:00").unwrap();
        assert_eq!(timestamp, offset);
    }

    #[test]
    fn from_unix_timestamp() {
        let timestamp = Timestamp::from_unix_timestamp(1_595_342_877).unwrap();
        assert_eq!(timestamp.to_string(), "2020-07-21T14:47:57.000Z");
    }

    #[test]
    fn deserialize() {
        let timestamp: Timestamp = from_value(json!("2020-07-21T15:51:53Z")).unwrap();
        assert_eq!(timestamp.to_string(), "2020-07-21T15:51:53.000Z");

        assert!(from_value::<Timestamp>(json!(1_595_342_877)).is_err());
        assert!(from_value::<Timestamp>(json!("yesterday")).is_err());
    }
}
