// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! `#[serde(with = "iso_datetime")]` for `Option<NaiveDateTime>`.
//!
//! The backend serializes timestamps without an offset (`2025-03-01T14:05:09.123`), but
//! some deployments add one (`2025-03-01T14:05:09Z`). Both are accepted. With an offset,
//! the wall clock time as written is kept.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer, de::Error};

const WIRE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];
const OUTPUT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// # Errors
///
/// Returns an error if the string is none of the accepted ISO-8601 shapes.
pub fn parse(input: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    let mut last_error = None;
    for format in WIRE_FORMATS {
        match NaiveDateTime::parse_from_str(input, format) {
            Ok(it) => return Ok(it),
            Err(error) => last_error = Some(error),
        }
    }
    match DateTime::parse_from_rfc3339(input) {
        Ok(it) => Ok(it.naive_local()),
        Err(error) => Err(last_error.unwrap_or(error)),
    }
}

/// # Errors
///
/// Propagates the serializer's error.
pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(it) => serializer.serialize_str(&it.format(OUTPUT_FORMAT).to_string()),
        None => serializer.serialize_none(),
    }
}

/// # Errors
///
/// Returns an error if the value is neither `null` nor an accepted timestamp string.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let maybe_raw: Option<String> = Option::deserialize(deserializer)?;
    match maybe_raw {
        None => Ok(None),
        Some(raw) if raw.trim().is_empty() => Ok(None),
        Some(raw) => parse(raw.trim())
            .map(Some)
            .map_err(|error| D::Error::custom(format!("invalid timestamp {raw:?}: {error}"))),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("2025-03-01T14:05:09"; "no fraction")]
    #[test_case("2025-03-01T14:05:09.987654"; "micro fraction")]
    #[test_case("2025-03-01T14:05"; "minutes only")]
    #[test_case("2025-03-01T14:05:09-03:00"; "with offset")]
    #[test_case("2025-03-01T14:05:09Z"; "utc")]
    fn test_parse_accepts_backend_shapes(input: &str) {
        let it = parse(input).unwrap();
        assert_eq!(it.format("%Y-%m-%d %H:%M").to_string(), "2025-03-01 14:05");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("yesterday").is_err());
    }
}
