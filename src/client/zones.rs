//! Zones and plants.

use crate::client::filter::Page;
use crate::client::path::encode_segment;
use crate::client::{ApiClient, ApiError, ApiRequest};
use crate::models::{NewPlant, NewZone, Plant, PlantUpdate, Zone, ZoneUpdate};

impl ApiClient {
    pub async fn list_zones(&self, page: Option<&Page>) -> Result<Vec<Zone>, ApiError> {
        self.fetch_records(ApiRequest::get("/zones").query(Page::query(page)))
            .await
    }

    pub async fn create_zone(&self, body: &NewZone) -> Result<Zone, ApiError> {
        self.fetch_record(ApiRequest::post("/zones").json(body)?).await
    }

    pub async fn get_zone(&self, zone_id: &str) -> Result<Zone, ApiError> {
        self.fetch_record(ApiRequest::get(format!("/zones/{}", encode_segment(zone_id))))
            .await
    }

    pub async fn update_zone(&self, zone_id: &str, body: &ZoneUpdate) -> Result<Zone, ApiError> {
        let request = ApiRequest::put(format!("/zones/{}", encode_segment(zone_id))).json(body)?;
        self.fetch_record(request).await
    }

    pub async fn delete_zone(&self, zone_id: &str) -> Result<Zone, ApiError> {
        self.fetch_record(ApiRequest::delete(format!("/zones/{}", encode_segment(zone_id))))
            .await
    }

    pub async fn list_plants(&self) -> Result<Vec<Plant>, ApiError> {
        self.fetch_records(ApiRequest::get("/plants")).await
    }

    pub async fn create_plant(&self, body: &NewPlant) -> Result<Plant, ApiError> {
        self.fetch_record(ApiRequest::post("/plants").json(body)?).await
    }

    pub async fn get_plant(&self, plant_id: &str) -> Result<Plant, ApiError> {
        self.fetch_record(ApiRequest::get(format!("/plants/{}", encode_segment(plant_id))))
            .await
    }

    pub async fn update_plant(&self, plant_id: &str, body: &PlantUpdate) -> Result<Plant, ApiError> {
        let request = ApiRequest::put(format!("/plants/{}", encode_segment(plant_id))).json(body)?;
        self.fetch_record(request).await
    }

    pub async fn delete_plant(&self, plant_id: &str) -> Result<Plant, ApiError> {
        self.fetch_record(ApiRequest::delete(format!("/plants/{}", encode_segment(plant_id))))
            .await
    }
}
