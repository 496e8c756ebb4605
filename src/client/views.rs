//! Composite loads backing the dashboard pages.
//!
//! Each view issues its requests concurrently. List views are
//! all-or-nothing. The sensor detail view treats the sensor as primary and
//! lets its readings and activity degrade to empty.

use serde::Serialize;
use tokio_util::sync::CancellationToken;

use crate::client::cancel::with_cancellation;
use crate::client::filter::{ActivityFilter, JobFilter, Page, ReadingFilter};
use crate::client::{ApiClient, ApiError};
use crate::models::{ActivityEvent, IrrigationJob, Plant, Sensor, SensorReading, Zone};

const ACTIVITY_LIMIT: u32 = 500;
const JOB_LIMIT: u32 = 500;
const SENSOR_LIMIT: u32 = 1000;
const DETAIL_READING_LIMIT: u32 = 200;
const DETAIL_ACTIVITY_LIMIT: u32 = 50;

#[derive(Debug, Clone, Serialize)]
pub struct ActivityView {
    pub zones: Vec<Zone>,
    pub plants: Vec<Plant>,
    pub sensors: Vec<Sensor>,
    pub events: Vec<ActivityEvent>,
}

#[derive(Debug, Clone, Serialize)]
pub struct IrrigationView {
    pub zones: Vec<Zone>,
    pub plants: Vec<Plant>,
    pub jobs: Vec<IrrigationJob>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SensorsView {
    pub zones: Vec<Zone>,
    pub plants: Vec<Plant>,
    pub sensors: Vec<Sensor>,
}

#[derive(Debug, Clone, Serialize)]
pub struct SensorDetailView {
    pub sensor: Sensor,
    pub readings: Vec<SensorReading>,
    pub activity: Vec<ActivityEvent>,
}

fn or_empty<T>(section: &'static str, result: Result<Vec<T>, ApiError>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!(section, error = %e, "Secondary load failed, showing empty");
        Vec::new()
    })
}

impl ApiClient {
    pub async fn load_activity_view(
        &self,
        cancel: &CancellationToken,
    ) -> Result<ActivityView, ApiError> {
        let event_filter = ActivityFilter {
            page: Page::limit(ACTIVITY_LIMIT),
            ..Default::default()
        };
        with_cancellation(cancel, async {
            let (zones, plants, sensors, events) = tokio::try_join!(
                self.list_zones(None),
                self.list_plants(),
                self.list_sensors(None),
                self.list_activity_events(Some(&event_filter)),
            )?;
            Ok(ActivityView {
                zones,
                plants,
                sensors,
                events,
            })
        })
        .await
    }

    pub async fn load_irrigation_view(
        &self,
        cancel: &CancellationToken,
    ) -> Result<IrrigationView, ApiError> {
        let job_filter = JobFilter {
            page: Page::limit(JOB_LIMIT),
            ..Default::default()
        };
        with_cancellation(cancel, async {
            let (zones, plants, jobs) = tokio::try_join!(
                self.list_zones(None),
                self.list_plants(),
                self.list_irrigation_jobs(Some(&job_filter)),
            )?;
            Ok(IrrigationView {
                zones,
                plants,
                jobs,
            })
        })
        .await
    }

    pub async fn load_sensors_view(
        &self,
        cancel: &CancellationToken,
    ) -> Result<SensorsView, ApiError> {
        let page = Page::limit(SENSOR_LIMIT);
        with_cancellation(cancel, async {
            let (zones, plants, sensors) = tokio::try_join!(
                self.list_zones(None),
                self.list_plants(),
                self.list_sensors(Some(&page)),
            )?;
            Ok(SensorsView {
                zones,
                plants,
                sensors,
            })
        })
        .await
    }

    pub async fn load_sensor_detail(
        &self,
        sensor_id: &str,
        cancel: &CancellationToken,
    ) -> Result<SensorDetailView, ApiError> {
        let reading_filter = ReadingFilter {
            sensor_id: Some(sensor_id.to_string()),
            page: Page::limit(DETAIL_READING_LIMIT),
        };
        let activity_filter = ActivityFilter {
            sensor_id: Some(sensor_id.to_string()),
            page: Page::limit(DETAIL_ACTIVITY_LIMIT),
            ..Default::default()
        };
        with_cancellation(cancel, async {
            let (sensor, readings, activity) = tokio::join!(
                self.get_sensor(sensor_id),
                self.list_sensor_readings(Some(&reading_filter)),
                self.list_activity_events(Some(&activity_filter)),
            );
            Ok(SensorDetailView {
                sensor: sensor?,
                readings: or_empty("readings", readings),
                activity: or_empty("activity", activity),
            })
        })
        .await
    }
}
