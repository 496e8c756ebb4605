//! Zones and the plants grown in them.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::models::wire::{FromWire, MappingError, WireRecord};

/// An irrigation zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Zone {
    pub id: String,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub deleted_at: Option<DateTime<Utc>>,
}

impl FromWire for Zone {
    const KIND: &'static str = "zone";

    fn from_wire(r: &WireRecord<'_>) -> Result<Self, MappingError> {
        Ok(Self {
            id: r.id(&["id"])?,
            name: r.string_or(&["name"], ""),
            is_active: r.bool_or(&["is_active"], false),
            created_at: r.required_timestamp(&["created_at"]),
            updated_at: r.required_timestamp(&["updated_at"]),
            deleted_at: r.optional_timestamp(&["deleted_at"]),
        })
    }
}

/// A plant tracked within a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plant {
    pub id: String,
    pub name: String,
    pub zone_id: Option<String>,
    pub image_url: Option<String>,
    pub health: Option<String>,
}

impl FromWire for Plant {
    const KIND: &'static str = "plant";

    fn from_wire(r: &WireRecord<'_>) -> Result<Self, MappingError> {
        Ok(Self {
            id: r.id(&["id"])?,
            name: r.string_or(&["name"], ""),
            zone_id: r.opt_id(&["zone_id"]),
            image_url: r.opt_string(&["image_url"]),
            health: r.opt_string(&["health"]),
        })
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewZone {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ZoneUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct NewPlant {
    pub name: String,
    pub zone_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub health: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct PlantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub health: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn soft_deleted_zone_keeps_deleted_at() {
        let zone = Zone::from_value(&json!({
            "id": "z1",
            "name": "Greenhouse",
            "is_active": false,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z",
            "deleted_at": "2024-01-03T00:00:00Z"
        }))
        .unwrap();
        assert!(zone.deleted_at.is_some());
        assert!(zone.created_at < zone.updated_at);
    }

    #[test]
    fn plant_without_zone_has_no_zone_id() {
        let plant = Plant::from_value(&json!({ "id": "p1", "name": "Basil" })).unwrap();
        assert!(plant.zone_id.is_none());
        assert!(plant.health.is_none());
    }

    #[test]
    fn zone_list_requires_an_array() {
        assert!(matches!(
            Zone::from_array(&json!({ "items": [] })),
            Err(MappingError::NotAnArray { kind: "zone" })
        ));
    }

    #[test]
    fn partial_update_only_sends_set_fields() {
        let body = ZoneUpdate {
            is_active: Some(false),
            ..Default::default()
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "is_active": false }));
    }
}
