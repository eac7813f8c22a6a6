//! Wall-clock timestamp decoding.
//!
//! Appointment providers hand over timestamps either as naive local
//! date-times or as RFC 3339 strings carrying an offset. The grid works in
//! local wall-clock time only, so an offset is dropped and the time is kept
//! exactly as written.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

use crate::error::{AgendaError, AgendaResult};

/// Canonical form used when a timestamp is written back out. Fractional
/// seconds are only written when present.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a timestamp into local wall-clock time.
///
/// Accepts `YYYY-MM-DDTHH:MM[:SS[.fff]]` (a space may replace the `T`) and
/// RFC 3339 with an offset. Anything else is rejected.
pub fn parse_timestamp(input: &str) -> AgendaResult<NaiveDateTime> {
    let input = input.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.naive_local());
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(input, fmt).ok())
        .ok_or_else(|| AgendaError::Timestamp(input.to_string()))
}

/// Serde adaptor: `#[serde(with = "crate::timestamp")]`
pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(TIMESTAMP_FORMAT))
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}
