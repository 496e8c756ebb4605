//! Path and query shaping for backend calls.
//!
//! The backend declares collection routes with a trailing slash
//! (`/zones/`) and resource routes without one (`/zones/{uuid}`,
//! `/.../file`). Callers pass paths in either form and
//! [`normalize_path`] picks the one the backend expects.

use std::fmt::Display;

use url::form_urlencoded;
use uuid::{Uuid, Variant};

/// Length of the hyphenated UUID form.
const HYPHENATED_LEN: usize = 36;

/// Whether `segment` is a hyphenated RFC 4122 UUID of version 1 to 5.
pub fn looks_like_uuid(segment: &str) -> bool {
    if segment.len() != HYPHENATED_LEN {
        return false;
    }
    match Uuid::try_parse(segment) {
        Ok(id) => id.get_variant() == Variant::RFC4122 && (1..=5).contains(&id.get_version_num()),
        Err(_) => false,
    }
}

/// Normalize a backend-relative path.
///
/// A leading slash is always present. Paths whose last segment is `file` or
/// a UUID lose any trailing slashes; every other path ends in exactly one.
pub fn normalize_path(path: &str) -> String {
    let path = if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    };

    let last = path.split('/').filter(|s| !s.is_empty()).last().unwrap_or("");
    if last == "file" || looks_like_uuid(last) {
        return path.trim_end_matches('/').to_string();
    }

    if path.ends_with('/') {
        path
    } else {
        format!("{path}/")
    }
}

/// Join a base and a path with exactly one slash between them.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.strip_suffix('/').unwrap_or(base);
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

/// Percent-encode one path segment.
pub fn encode_segment(segment: &str) -> String {
    // form encoding writes spaces as '+'; a literal '+' is already %2B
    form_urlencoded::byte_serialize(segment.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}

/// Query parameters where absent values are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `key` when `value` is present.
    pub fn param<V: Display>(mut self, key: &'static str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Form-urlencoded query string without the leading `?`.
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.pairs.iter().map(|(k, v)| (*k, v.as_str())))
            .finish()
    }

    /// Append to `path`, adding `?` only when there is something to add.
    pub fn apply(&self, path: &str) -> String {
        if self.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{}", self.encode())
        }
    }
}
