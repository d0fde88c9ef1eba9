/*
 * Copyright (c) 2025 Craig Hamilton and Contributors.
 * Licensed under either of
 *  - Apache License, Version 2.0 <http://www.apache.org/licenses/LICENSE-2.0> OR
 *  - MIT license <http://opensource.org/licenses/MIT>
 *  at your option.
 */

//! Response fields are kept as the strings the API sends. These helpers turn
//! them into typed values when a caller needs one.

use crate::rest::errors::FlickrError;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::str::FromStr;

/// Parses "1"/"0" style flags. An empty value counts as not set.
pub fn parse_flag(field: &'static str, value: &str) -> Result<bool, FlickrError> {
    match value {
        "1" | "true" => Ok(true),
        "0" | "false" | "" => Ok(false),
        _ => Err(FlickrError::InvalidField(field, value.to_string())),
    }
}

/// Parses a numeric field, `None` when the API left it empty
pub fn parse_number<T: FromStr>(field: &'static str, value: &str) -> Result<Option<T>, FlickrError> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse::<T>()
        .map(Some)
        .map_err(|_| FlickrError::InvalidField(field, value.to_string()))
}

/// Parses a unix timestamp in seconds
pub fn parse_unix_time(
    field: &'static str,
    value: &str,
) -> Result<Option<DateTime<Utc>>, FlickrError> {
    match parse_number::<i64>(field, value)? {
        Some(secs) => DateTime::from_timestamp(secs, 0)
            .map(Some)
            .ok_or(FlickrError::InvalidField(field, value.to_string())),
        None => Ok(None),
    }
}

// Parses flag attributes into a bool
pub(crate) fn from_flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    parse_flag("flag", &s).map_err(serde::de::Error::custom)
}

// Parses strings that may be "" and sets to None
pub(crate) fn from_empty_str_to_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s: String = Deserialize::deserialize(deserializer)?;
    if s.is_empty() {
        Ok(None)
    } else {
        Ok(Some(s))
    }
}
