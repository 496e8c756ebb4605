//! Timestamp mapping for wire records.
//!
//! The backend emits timestamps as ISO-8601 strings (with or without an
//! offset) or as epoch milliseconds. Mapping never fails: a value that does
//! not parse is treated as absent, and the field's [`Presence`] decides what
//! absent means.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::Value;

/// How a timestamp field behaves when its value is missing or unparsable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// Always populated; falls back to the Unix epoch.
    Required,
    /// Falls back to `None`.
    Optional,
}

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a single wire value into a UTC timestamp.
///
/// Offset-less datetimes are read as UTC.
pub fn parse_timestamp(value: &Value) -> Option<DateTime<Utc>> {
    match value {
        Value::String(s) => parse_text(s.trim()),
        Value::Number(n) => {
            let millis = match n.as_i64() {
                Some(ms) => ms,
                None => n.as_f64().filter(|f| f.is_finite())?.trunc() as i64,
            };
            DateTime::from_timestamp_millis(millis)
        }
        _ => None,
    }
}

fn parse_text(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, format) {
            return Some(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc());
    }
    DateTime::parse_from_rfc2822(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Apply the presence policy to an optional wire value.
///
/// `Required` always yields `Some`.
pub fn map_timestamp(value: Option<&Value>, presence: Presence) -> Option<DateTime<Utc>> {
    let parsed = value.and_then(parse_timestamp);
    match presence {
        Presence::Required => Some(parsed.unwrap_or(DateTime::<Utc>::UNIX_EPOCH)),
        Presence::Optional => parsed,
    }
}
