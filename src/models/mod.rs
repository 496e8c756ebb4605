//! Typed domain records and the wire mapping that builds them.
//!
//! The backend's JSON is loosely shaped: field casing varies for some
//! records and timestamps may be missing or malformed. Each record
//! implements [`FromWire`] with an explicit alias list per field; bodies
//! sent to the backend are plain `Serialize` structs.

pub mod activity;
pub mod device;
pub mod ingestion;
pub mod irrigation;
pub mod sensor;
pub mod timestamp;
pub mod wire;
pub mod zone;

pub use activity::{ActivityEvent, NewActivityEvent};
pub use device::{
    Device, DeviceCapabilities, DeviceImage, DeviceLog, DeviceLogLevel, DeviceProvisioning,
    DeviceUpdate, NewDevice, ProvisionedSensor, ProvisionedSensorKind,
};
pub use ingestion::{DeviceLogEntry, ImageUpload, TelemetryBatch, TelemetryReading};
pub use irrigation::{IrrigationJob, IrrigationJobUpdate, JobAction, NewIrrigationJob, Scope, Status};
pub use sensor::{NewSensor, NewSensorReading, Sensor, SensorReading, SensorUpdate};
pub use timestamp::{map_timestamp, parse_timestamp, Presence};
pub use wire::{FromWire, MappingError, WireRecord};
pub use zone::{NewPlant, NewZone, Plant, PlantUpdate, Zone, ZoneUpdate};
