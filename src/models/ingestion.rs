//! Payloads pushed by field hardware through the external-device endpoints.
//!
//! These use camelCase on the wire, unlike the dashboard records.

use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryReading {
    pub sensor_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub value: f64,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryBatch {
    pub sent_at: DateTime<Utc>,
    pub readings: Vec<TelemetryReading>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceLogEntry {
    pub level: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

/// A camera capture to upload as multipart form data.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    /// Camera or view name, sent as the `type` field.
    pub image_type: String,
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
    pub captured_at: Option<DateTime<Utc>>,
}
