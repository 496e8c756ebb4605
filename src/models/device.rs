//! Devices and the logs and images they report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::wire::{FromWire, MappingError, WireRecord};

const DEVICE_ID: &[&str] = &["device_id", "deviceId", "deviceID"];

/// A controller board in the field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Device {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub is_active: bool,
    pub is_online: bool,
    pub last_seen_at: Option<DateTime<Utc>>,
    /// Seconds since boot, as last reported.
    pub uptime: Option<i64>,
    pub hardware_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FromWire for Device {
    const KIND: &'static str = "device";

    fn from_wire(r: &WireRecord<'_>) -> Result<Self, MappingError> {
        Ok(Self {
            id: r.id(&["id"])?,
            name: r.string_or(&["name"], ""),
            description: r.opt_string(&["description"]),
            is_active: r.bool_or(&["is_active"], false),
            is_online: r.bool_or(&["is_online"], false),
            last_seen_at: r.optional_timestamp(&["last_seen_at"]),
            uptime: r.opt_i64(&["uptime"]),
            hardware_id: r.opt_string(&["hardware_id"]),
            created_at: r.required_timestamp(&["created_at"]),
            updated_at: r.required_timestamp(&["updated_at"]),
        })
    }
}

/// Severity of a device log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeviceLogLevel {
    Debug,
    Info,
    Warn,
    Error,
    Critical,
    #[default]
    #[serde(other)]
    Unknown,
}

/// One log line reported by a device.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceLog {
    pub id: String,
    pub device_id: Option<String>,
    pub level: DeviceLogLevel,
    pub message: String,
    pub recorded_at: DateTime<Utc>,
}

impl FromWire for DeviceLog {
    const KIND: &'static str = "device log";

    fn from_wire(r: &WireRecord<'_>) -> Result<Self, MappingError> {
        Ok(Self {
            id: r.id(&["id"])?,
            device_id: r.opt_id(DEVICE_ID),
            level: r.enumerated(&["level"]),
            message: r.string_or(&["message"], ""),
            recorded_at: r.required_timestamp(&["recorded_at", "recordedAt"]),
        })
    }
}

/// Metadata for a camera capture. The bytes live behind
/// [`crate::client::device_image_file_url`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceImage {
    pub id: String,
    pub device_id: Option<String>,
    /// Camera or view name, e.g. "top".
    #[serde(rename = "type")]
    pub image_type: String,
    pub image_url: String,
    pub captured_at: DateTime<Utc>,
    pub plant_id: Option<String>,
    pub zone_id: Option<String>,
    pub metadata_json: Option<Value>,
}

impl FromWire for DeviceImage {
    const KIND: &'static str = "device image";

    fn from_wire(r: &WireRecord<'_>) -> Result<Self, MappingError> {
        Ok(Self {
            id: r.id(&["id"])?,
            device_id: r.opt_id(DEVICE_ID),
            image_type: r.string_or(&["type"], ""),
            image_url: r.string_or(&["image_url", "imageUrl", "imageURL"], ""),
            captured_at: r.required_timestamp(&["captured_at", "capturedAt"]),
            plant_id: r.opt_id(&["plant_id", "plantId"]),
            zone_id: r.opt_id(&["zone_id", "zoneId"]),
            metadata_json: r.raw(&["metadata_json", "metadataJson"]),
        })
    }
}

/// Body for creating a device.
#[derive(Debug, Clone, Default, Serialize)]
pub struct NewDevice {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Partial device update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeviceUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Sensor kinds a device can announce when provisioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProvisionedSensorKind {
    Humidity,
    Temperature,
    Flow,
    WaterLevel,
    AirQuality,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionedSensor {
    pub local_name: String,
    #[serde(rename = "type")]
    pub kind: ProvisionedSensorKind,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DeviceCapabilities {
    pub sensors: Vec<ProvisionedSensor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cameras: Option<Vec<String>>,
}

/// Body for registering new hardware.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceProvisioning {
    pub hardware_id: String,
    pub firmware: String,
    pub capabilities: DeviceCapabilities,
}
