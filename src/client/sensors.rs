//! Sensors and sensor readings.

use crate::client::filter::{Page, ReadingFilter};
use crate::client::path::encode_segment;
use crate::client::{ApiClient, ApiError, ApiRequest};
use crate::models::{NewSensor, NewSensorReading, Sensor, SensorReading, SensorUpdate};

fn sensor_path(sensor_id: &str) -> String {
    format!("/sensors/{}", encode_segment(sensor_id))
}

fn reading_path(reading_id: &str) -> String {
    format!("/sensor-readings/{}", encode_segment(reading_id))
}

impl ApiClient {
    pub async fn list_sensors(&self, page: Option<&Page>) -> Result<Vec<Sensor>, ApiError> {
        self.fetch_records(ApiRequest::get("/sensors").query(Page::query(page)))
            .await
    }

    pub async fn create_sensor(&self, body: &NewSensor) -> Result<Sensor, ApiError> {
        self.fetch_record(ApiRequest::post("/sensors").json(body)?).await
    }

    pub async fn get_sensor(&self, sensor_id: &str) -> Result<Sensor, ApiError> {
        self.fetch_record(ApiRequest::get(sensor_path(sensor_id))).await
    }

    pub async fn update_sensor(
        &self,
        sensor_id: &str,
        body: &SensorUpdate,
    ) -> Result<Sensor, ApiError> {
        self.fetch_record(ApiRequest::put(sensor_path(sensor_id)).json(body)?)
            .await
    }

    pub async fn delete_sensor(&self, sensor_id: &str) -> Result<Sensor, ApiError> {
        self.fetch_record(ApiRequest::delete(sensor_path(sensor_id))).await
    }

    pub async fn list_sensor_readings(
        &self,
        filter: Option<&ReadingFilter>,
    ) -> Result<Vec<SensorReading>, ApiError> {
        let request = ApiRequest::get("/sensor-readings").query(ReadingFilter::query(filter));
        self.fetch_records(request).await
    }

    pub async fn create_sensor_reading(
        &self,
        body: &NewSensorReading,
    ) -> Result<SensorReading, ApiError> {
        self.fetch_record(ApiRequest::post("/sensor-readings").json(body)?)
            .await
    }

    pub async fn get_sensor_reading(&self, reading_id: &str) -> Result<SensorReading, ApiError> {
        self.fetch_record(ApiRequest::get(reading_path(reading_id))).await
    }

    pub async fn delete_sensor_reading(&self, reading_id: &str) -> Result<SensorReading, ApiError> {
        self.fetch_record(ApiRequest::delete(reading_path(reading_id)))
            .await
    }
}
