//! Sensors and their readings.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::wire::{FromWire, MappingError, WireRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sensor {
    pub id: String,
    pub name: String,
    /// Free-form kind reported by the backend, e.g. "humidity".
    #[serde(rename = "type")]
    pub sensor_type: String,
    pub unit: Option<String>,
    pub is_active: bool,
    pub zone_id: Option<String>,
    pub plant_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl FromWire for Sensor {
    const KIND: &'static str = "sensor";

    fn from_wire(r: &WireRecord<'_>) -> Result<Self, MappingError> {
        Ok(Self {
            id: r.id(&["id"])?,
            name: r.string_or(&["name"], ""),
            sensor_type: r.string_or(&["type"], ""),
            unit: r.opt_string(&["unit"]),
            is_active: r.bool_or(&["is_active"], false),
            zone_id: r.opt_id(&["zone_id"]),
            plant_id: r.opt_id(&["plant_id"]),
            created_at: r.required_timestamp(&["created_at"]),
            updated_at: r.required_timestamp(&["updated_at"]),
            deleted_at: r.optional_timestamp(&["deleted_at"]),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SensorReading {
    pub id: String,
    pub sensor_id: Option<String>,
    pub value: f64,
    pub recorded_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl FromWire for SensorReading {
    const KIND: &'static str = "sensor reading";

    fn from_wire(r: &WireRecord<'_>) -> Result<Self, MappingError> {
        Ok(Self {
            id: r.id(&["id"])?,
            sensor_id: r.opt_id(&["sensor_id"]),
            value: r.opt_f64(&["value"]).unwrap_or_default(),
            recorded_at: r.required_timestamp(&["recorded_at"]),
            deleted_at: r.optional_timestamp(&["deleted_at"]),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewSensor {
    pub name: String,
    #[serde(rename = "type")]
    pub sensor_type: String,
    pub unit: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SensorUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub sensor_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_id: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewSensorReading {
    pub sensor_id: String,
    pub value: f64,
    /// Server time is used when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}
