use crate::client::filter::ActivityFilter;
use crate::client::path::encode_segment;
use crate::client::{ApiClient, ApiError, ApiRequest};
use crate::models::{ActivityEvent, NewActivityEvent};

fn event_path(event_id: &str) -> String {
    format!("/activity/{}", encode_segment(event_id))
}

impl ApiClient {
    pub async fn list_activity_events(
        &self,
        filter: Option<&ActivityFilter>,
    ) -> Result<Vec<ActivityEvent>, ApiError> {
        let request = ApiRequest::get("/activity").query(ActivityFilter::query(filter));
        self.fetch_records(request).await
    }

    pub async fn create_activity_event(
        &self,
        body: &NewActivityEvent,
    ) -> Result<ActivityEvent, ApiError> {
        self.fetch_record(ApiRequest::post("/activity").json(body)?)
            .await
    }

    pub async fn get_activity_event(&self, event_id: &str) -> Result<ActivityEvent, ApiError> {
        self.fetch_record(ApiRequest::get(event_path(event_id))).await
    }

    pub async fn delete_activity_event(&self, event_id: &str) -> Result<ActivityEvent, ApiError> {
        self.fetch_record(ApiRequest::delete(event_path(event_id))).await
    }
}
