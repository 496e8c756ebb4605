//! Alias-aware field access over raw JSON records.
//!
//! Some backend shapes vary their field casing (`device_id`, `deviceId`,
//! `deviceID`). Every accessor takes an ordered alias list and uses the
//! first alias whose value is present and not `null`.

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::timestamp::{map_timestamp, Presence};

/// A record could not be mapped into its typed form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    #[error("{kind} record is not a JSON object")]
    NotAnObject { kind: &'static str },

    #[error("{kind} record is missing `{field}`")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    #[error("expected a JSON array of {kind} records")]
    NotAnArray { kind: &'static str },
}

/// Typed records built from raw wire JSON.
pub trait FromWire: Sized {
    /// Record name used in error messages.
    const KIND: &'static str;

    /// Map one raw record.
    fn from_wire(record: &WireRecord<'_>) -> Result<Self, MappingError>;

    /// Map a single JSON value.
    fn from_value(value: &Value) -> Result<Self, MappingError> {
        Self::from_wire(&WireRecord::new(Self::KIND, value)?)
    }

    /// Map a JSON array.
    fn from_array(value: &Value) -> Result<Vec<Self>, MappingError> {
        value
            .as_array()
            .ok_or(MappingError::NotAnArray { kind: Self::KIND })?
            .iter()
            .map(Self::from_value)
            .collect()
    }
}

/// Borrowed view of a raw JSON object.
#[derive(Debug, Clone, Copy)]
pub struct WireRecord<'a> {
    kind: &'static str,
    fields: &'a Map<String, Value>,
}

impl<'a> WireRecord<'a> {
    pub fn new(kind: &'static str, value: &'a Value) -> Result<Self, MappingError> {
        let fields = value.as_object().ok_or(MappingError::NotAnObject { kind })?;
        Ok(Self { kind, fields })
    }

    /// First alias present with a non-null value.
    pub fn lookup(&self, aliases: &[&str]) -> Option<&'a Value> {
        aliases
            .iter()
            .filter_map(|alias| self.fields.get(*alias))
            .find(|value| !value.is_null())
    }

    fn missing(&self, aliases: &[&'static str]) -> MappingError {
        MappingError::MissingField {
            kind: self.kind,
            field: aliases.first().copied().unwrap_or("?"),
        }
    }

    /// Identifier-like string; numbers are accepted and stringified.
    pub fn id(&self, aliases: &[&'static str]) -> Result<String, MappingError> {
        match self.lookup(aliases) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(Value::Number(n)) => Ok(n.to_string()),
            _ => Err(self.missing(aliases)),
        }
    }

    pub fn opt_id(&self, aliases: &[&str]) -> Option<String> {
        match self.lookup(aliases)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    pub fn opt_string(&self, aliases: &[&str]) -> Option<String> {
        self.lookup(aliases)
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// String field that falls back to `default` when absent.
    pub fn string_or(&self, aliases: &[&str], default: &str) -> String {
        self.opt_string(aliases)
            .unwrap_or_else(|| default.to_string())
    }

    pub fn bool_or(&self, aliases: &[&str], default: bool) -> bool {
        self.lookup(aliases)
            .and_then(Value::as_bool)
            .unwrap_or(default)
    }

    pub fn opt_f64(&self, aliases: &[&str]) -> Option<f64> {
        self.lookup(aliases).and_then(Value::as_f64)
    }

    pub fn opt_i64(&self, aliases: &[&str]) -> Option<i64> {
        self.lookup(aliases).and_then(|v| {
            v.as_i64()
                .or_else(|| v.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))
        })
    }

    /// Raw JSON, for opaque payloads such as image metadata.
    pub fn raw(&self, aliases: &[&str]) -> Option<Value> {
        self.lookup(aliases).cloned()
    }

    /// Enumerated string field; unknown values map to `T::default()`.
    pub fn enumerated<T>(&self, aliases: &[&str]) -> T
    where
        T: DeserializeOwned + Default,
    {
        self.lookup(aliases)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default()
    }

    /// Timestamp that is never absent; falls back to the Unix epoch.
    pub fn required_timestamp(&self, aliases: &[&str]) -> DateTime<Utc> {
        map_timestamp(self.lookup(aliases), Presence::Required)
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    /// Timestamp that is `None` when absent or unparsable.
    pub fn optional_timestamp(&self, aliases: &[&str]) -> Option<DateTime<Utc>> {
        map_timestamp(self.lookup(aliases), Presence::Optional)
    }
}
