//! Wire codec for the API's date-time values.
//!
//! The service emits timestamps as `YYYY-MM-DDTHH:MM:SS.mmm` with exactly
//! three fractional digits and no zone designator. Decoding is strict:
//! anything else is rejected rather than guessed at.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f";
const WIRE_LEN: usize = "2006-01-02T15:04:05.000".len();

/// A date-time as exchanged with the Leonardo API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(pub NaiveDateTime);

/// A string that is not in the `YYYY-MM-DDTHH:MM:SS.mmm` wire format.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid timestamp {value:?}: expected YYYY-MM-DDTHH:MM:SS.mmm")]
pub struct TimestampError {
    value: String,
}

impl Timestamp {
    /// Parse a wire value. Surrounding double quotes are ignored.
    pub fn parse(s: &str) -> Result<Self, TimestampError> {
        let s = s.trim_matches('"');
        let err = || TimestampError {
            value: s.to_string(),
        };

        // chrono alone accepts signed or padded years and leap seconds.
        if !has_wire_shape(s.as_bytes()) {
            return Err(err());
        }

        NaiveDateTime::parse_from_str(s, FORMAT)
            .map(Timestamp)
            .map_err(|_| err())
    }

    pub fn as_naive(&self) -> &NaiveDateTime {
        &self.0
    }
}

/// `DDDD-DD-DDTDD:DD:DD.DDD`, with seconds below 60.
fn has_wire_shape(bytes: &[u8]) -> bool {
    if bytes.len() != WIRE_LEN {
        return false;
    }
    let separators_ok = [(4, b'-'), (7, b'-'), (10, b'T'), (13, b':'), (16, b':'), (19, b'.')]
        .iter()
        .all(|&(at, sep)| bytes[at] == sep);
    let digits_ok = [0..4, 5..7, 8..10, 11..13, 14..16, 17..19, 20..23]
        .into_iter()
        .all(|range| bytes[range].iter().all(u8::is_ascii_digit));
    separators_ok && digits_ok && bytes[17] < b'6'
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self(value)
    }
}

impl From<Timestamp> for NaiveDateTime {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Timestamp::parse(&raw).map_err(serde::de::Error::custom)
    }
}
