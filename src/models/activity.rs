//! Activity feed events.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::wire::{FromWire, MappingError, WireRecord};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityEvent {
    pub id: String,
    #[serde(rename = "type")]
    pub event_type: String,
    pub message: String,
    pub zone_id: Option<String>,
    pub plant_id: Option<String>,
    pub sensor_id: Option<String>,
    pub occurred_at: DateTime<Utc>,
}

impl FromWire for ActivityEvent {
    const KIND: &'static str = "activity event";

    fn from_wire(r: &WireRecord<'_>) -> Result<Self, MappingError> {
        Ok(Self {
            id: r.id(&["id"])?,
            event_type: r.string_or(&["type"], ""),
            message: r.string_or(&["message"], ""),
            zone_id: r.opt_id(&["zone_id"]),
            plant_id: r.opt_id(&["plant_id"]),
            sensor_id: r.opt_id(&["sensor_id"]),
            occurred_at: r.required_timestamp(&["occurred_at"]),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewActivityEvent {
    #[serde(rename = "type")]
    pub event_type: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<DateTime<Utc>>,
}
