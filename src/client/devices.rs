//! Device management plus the logs and camera images devices report.

use serde_json::Value;

use crate::client::path::encode_segment;
use crate::client::{ApiClient, ApiError, ApiRequest};
use crate::config::API_PREFIX;
use crate::models::{
    Device, DeviceImage, DeviceLog, DeviceProvisioning, DeviceUpdate, NewDevice,
};

fn device_path(device_id: &str) -> String {
    format!("/devices/{}", encode_segment(device_id))
}

/// Gateway-relative URL serving one image's bytes, usable as an `<img src>`.
pub fn device_image_file_url(device_id: &str, image_id: &str) -> String {
    format!(
        "{API_PREFIX}/devices/{}/images/{}/file",
        encode_segment(device_id),
        encode_segment(image_id)
    )
}

/// Gateway-relative URL serving the newest image of one camera type.
pub fn device_latest_image_file_url(device_id: &str, image_type: &str) -> String {
    format!(
        "{API_PREFIX}/devices/{}/images/by-type/{}/file",
        encode_segment(device_id),
        encode_segment(image_type)
    )
}

impl ApiClient {
    pub async fn list_devices(&self) -> Result<Vec<Device>, ApiError> {
        self.fetch_records(ApiRequest::get("/devices")).await
    }

    pub async fn create_device(&self, body: &NewDevice) -> Result<Device, ApiError> {
        self.fetch_record(ApiRequest::post("/devices").json(body)?).await
    }

    pub async fn get_device(&self, device_id: &str) -> Result<Device, ApiError> {
        self.fetch_record(ApiRequest::get(device_path(device_id))).await
    }

    pub async fn update_device(
        &self,
        device_id: &str,
        body: &DeviceUpdate,
    ) -> Result<Device, ApiError> {
        self.fetch_record(ApiRequest::put(device_path(device_id)).json(body)?)
            .await
    }

    /// Returns the deleted device as the backend echoes it.
    pub async fn delete_device(&self, device_id: &str) -> Result<Device, ApiError> {
        self.fetch_record(ApiRequest::delete(device_path(device_id))).await
    }

    /// Register new hardware. The backend's answer is passed through untyped.
    pub async fn provision_device(&self, body: &DeviceProvisioning) -> Result<Value, ApiError> {
        self.fetch_json(ApiRequest::post("/devices/provision").json(body)?)
            .await
    }

    pub async fn list_device_logs(&self, device_id: &str) -> Result<Vec<DeviceLog>, ApiError> {
        self.fetch_records(ApiRequest::get(format!("{}/logs", device_path(device_id))))
            .await
    }

    pub async fn list_device_images(&self, device_id: &str) -> Result<Vec<DeviceImage>, ApiError> {
        self.fetch_records(ApiRequest::get(format!("{}/images", device_path(device_id))))
            .await
    }

    pub async fn get_device_image(
        &self,
        device_id: &str,
        image_id: &str,
    ) -> Result<DeviceImage, ApiError> {
        let path = format!("{}/images/{}", device_path(device_id), encode_segment(image_id));
        self.fetch_record(ApiRequest::get(path)).await
    }

    /// Absolute URL of one image's bytes on this client's origin.
    pub fn device_image_file_url(&self, device_id: &str, image_id: &str) -> String {
        self.image_file_url(&device_image_file_url(device_id, image_id))
    }
}
