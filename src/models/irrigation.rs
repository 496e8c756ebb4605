//! Watering jobs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::wire::{FromWire, MappingError, WireRecord};

/// What a job waters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    Global,
    Zone,
    Plant,
    #[default]
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Queued,
    Running,
    Succeeded,
    Failed,
    Cancelled,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Status {
    /// Wire value, as accepted by the `status` list filter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Queued => "queued",
            Status::Running => "running",
            Status::Succeeded => "succeeded",
            Status::Failed => "failed",
            Status::Cancelled => "cancelled",
            Status::Unknown => "unknown",
        }
    }

    /// Whether the job can still change state.
    pub fn is_active(&self) -> bool {
        matches!(self, Status::Queued | Status::Running)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "queued" => Ok(Status::Queued),
            "running" => Ok(Status::Running),
            "succeeded" => Ok(Status::Succeeded),
            "failed" => Ok(Status::Failed),
            "cancelled" => Ok(Status::Cancelled),
            other => Err(format!("unknown job status '{other}'")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IrrigationJob {
    pub id: String,
    pub scope: Scope,
    pub zone_id: Option<String>,
    pub plant_id: Option<String>,
    /// "start" or "stop".
    pub action: String,
    pub duration_seconds: i64,
    pub status: Status,
    pub requested_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub error_message: Option<String>,
}

impl FromWire for IrrigationJob {
    const KIND: &'static str = "irrigation job";

    fn from_wire(r: &WireRecord<'_>) -> Result<Self, MappingError> {
        Ok(Self {
            id: r.id(&["id"])?,
            scope: r.enumerated(&["scope"]),
            zone_id: r.opt_id(&["zone_id"]),
            plant_id: r.opt_id(&["plant_id"]),
            action: r.string_or(&["action"], ""),
            duration_seconds: r.opt_i64(&["duration_seconds"]).unwrap_or_default(),
            status: r.enumerated(&["status"]),
            requested_at: r.required_timestamp(&["requested_at"]),
            started_at: r.optional_timestamp(&["started_at"]),
            ended_at: r.optional_timestamp(&["ended_at"]),
            error_message: r.opt_string(&["error_message"]),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobAction {
    Start,
    Stop,
}

/// Body for queueing a job against a zone or a plant.
#[derive(Debug, Clone, Serialize)]
pub struct NewIrrigationJob {
    pub scope: Scope,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zone_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plant_id: Option<String>,
    pub action: JobAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_seconds: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct IrrigationJobUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}
