use crate::client::filter::JobFilter;
use crate::client::path::encode_segment;
use crate::client::{ApiClient, ApiError, ApiRequest};
use crate::models::{IrrigationJob, IrrigationJobUpdate, NewIrrigationJob};

fn job_path(job_id: &str) -> String {
    format!("/irrigation/{}", encode_segment(job_id))
}

impl ApiClient {
    pub async fn list_irrigation_jobs(
        &self,
        filter: Option<&JobFilter>,
    ) -> Result<Vec<IrrigationJob>, ApiError> {
        self.fetch_records(ApiRequest::get("/irrigation").query(JobFilter::query(filter)))
            .await
    }

    pub async fn create_irrigation_job(
        &self,
        body: &NewIrrigationJob,
    ) -> Result<IrrigationJob, ApiError> {
        self.fetch_record(ApiRequest::post("/irrigation").json(body)?)
            .await
    }

    pub async fn get_irrigation_job(&self, job_id: &str) -> Result<IrrigationJob, ApiError> {
        self.fetch_record(ApiRequest::get(job_path(job_id))).await
    }

    pub async fn update_irrigation_job(
        &self,
        job_id: &str,
        body: &IrrigationJobUpdate,
    ) -> Result<IrrigationJob, ApiError> {
        self.fetch_record(ApiRequest::put(job_path(job_id)).json(body)?)
            .await
    }

    pub async fn delete_irrigation_job(&self, job_id: &str) -> Result<IrrigationJob, ApiError> {
        self.fetch_record(ApiRequest::delete(job_path(job_id))).await
    }
}
