//! Endpoints that field hardware pushes to. Responses are not typed.

use reqwest::multipart::{Form, Part};
use serde_json::Value;

use crate::client::path::encode_segment;
use crate::client::{ApiClient, ApiError, ApiRequest};
use crate::models::{DeviceLogEntry, ImageUpload, TelemetryBatch};

fn external_path(device_id: &str, tail: &str) -> String {
    format!("/external-devices/{}/{tail}", encode_segment(device_id))
}

fn image_form(upload: &ImageUpload) -> Result<Form, ApiError> {
    let file = Part::bytes(upload.bytes.clone())
        .file_name(upload.file_name.clone())
        .mime_str(&upload.content_type)?;
    let mut form = Form::new()
        .text("type", upload.image_type.clone())
        .part("file", file);
    if let Some(captured_at) = upload.captured_at {
        form = form.text("captured_at", captured_at.to_rfc3339());
    }
    Ok(form)
}

impl ApiClient {
    pub async fn ingest_telemetry(
        &self,
        device_id: &str,
        batch: &TelemetryBatch,
    ) -> Result<Value, ApiError> {
        let request = ApiRequest::post(external_path(device_id, "telemetry")).json(batch)?;
        self.fetch_json(request).await
    }

    pub async fn ingest_device_log(
        &self,
        device_id: &str,
        entry: &DeviceLogEntry,
    ) -> Result<Value, ApiError> {
        let request = ApiRequest::post(external_path(device_id, "logs")).json(entry)?;
        self.fetch_json(request).await
    }

    pub async fn external_device_status(&self, device_id: &str) -> Result<Value, ApiError> {
        self.fetch_json(ApiRequest::get(external_path(device_id, "status")))
            .await
    }

    /// Upload one capture as `multipart/form-data`.
    pub async fn upload_device_image(
        &self,
        device_id: &str,
        upload: &ImageUpload,
    ) -> Result<Value, ApiError> {
        let request =
            ApiRequest::post(external_path(device_id, "images")).multipart(image_form(upload)?);
        self.fetch_json(request).await
    }
}
