//! Typed client for the irrigation backend, spoken through the gateway.
//!
//! # Responsibilities
//! - Normalize paths and encode queries the way the backend routes expect
//! - Turn non-2xx answers into [`ApiError::Status`]
//! - Map JSON bodies into typed records via [`crate::models::FromWire`]
//!
//! One method per backend operation lives in the family modules
//! (`devices`, `zones`, `sensors`, ...). No retries and no caching.

mod activity;
pub mod cancel;
mod devices;
pub mod error;
pub mod filter;
mod ingestion;
mod irrigation;
pub mod path;
mod sensors;
pub mod views;
mod zones;

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::multipart::Form;
use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use url::Url;

use crate::config::API_PREFIX;
use crate::models::FromWire;

pub use cancel::with_cancellation;
pub use devices::{device_image_file_url, device_latest_image_file_url};
pub use error::{ApiError, DecodeError};
pub use filter::{ActivityFilter, JobFilter, Page, ReadingFilter};
pub use path::{encode_segment, join_url, looks_like_uuid, normalize_path, Query};
pub use views::{ActivityView, IrrigationView, SensorDetailView, SensorsView};

enum Payload {
    Json(Vec<u8>),
    Multipart(Form),
}

/// One backend call, described relative to the API prefix.
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Query,
    headers: HeaderMap,
    payload: Option<Payload>,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Query::new(),
            headers: HeaderMap::new(),
            payload: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn query(mut self, query: Query) -> Self {
        self.query = query;
        self
    }

    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Attach a JSON body.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        let bytes = serde_json::to_vec(body).map_err(ApiError::Encode)?;
        self.payload = Some(Payload::Json(bytes));
        Ok(self)
    }

    /// Attach a multipart body; reqwest sets the boundary header.
    pub fn multipart(mut self, form: Form) -> Self {
        self.payload = Some(Payload::Multipart(form));
        self
    }
}

/// Async client for the backend API.
///
/// `base_url` is the origin serving `/api/v1`, normally the gateway itself.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Build a client with its own connection pool.
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base_url = Url::parse(base_url).map_err(|source| ApiError::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        let http = reqwest::Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(http: reqwest::Client, base_url: Url) -> Self {
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn api_base(&self) -> String {
        join_url(self.base_url.as_str(), API_PREFIX)
    }

    /// Absolute URL for a backend-relative path and query.
    pub fn request_url(&self, path: &str, query: &Query) -> Result<Url, ApiError> {
        let url = query.apply(&format!("{}{}", self.api_base(), normalize_path(path)));
        Url::parse(&url).map_err(|source| ApiError::InvalidUrl { url, source })
    }

    /// Resolve a gateway-relative path such as the ones returned by
    /// [`device_image_file_url`] against this client's origin.
    pub fn image_file_url(&self, relative: &str) -> String {
        join_url(self.base_url.as_str(), relative)
    }

    async fn send(&self, request: ApiRequest) -> Result<(Url, Value), ApiError> {
        let ApiRequest {
            method,
            path,
            query,
            mut headers,
            payload,
        } = request;

        let url = self.request_url(&path, &query)?;
        if !headers.contains_key(ACCEPT) {
            headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        }

        let mut builder = self.http.request(method.clone(), url.clone());
        match payload {
            Some(Payload::Json(bytes)) => {
                if !headers.contains_key(CONTENT_TYPE) {
                    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
                }
                builder = builder.body(bytes);
            }
            Some(Payload::Multipart(form)) => builder = builder.multipart(form),
            None => {}
        }

        tracing::debug!(method = %method, url = %url, "API request");
        let response = builder.headers(headers).send().await?;
        let status = response.status();

        if !status.is_success() {
            // the status is the error; an unreadable body just loses detail
            let text = response.text().await.unwrap_or_default();
            tracing::debug!(method = %method, url = %url, status = status.as_u16(), "API error status");
            return Err(ApiError::status(status, &text, &url));
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok((url, Value::Null));
        }
        let value = serde_json::from_slice(&bytes).map_err(|e| ApiError::decode(&url, e))?;
        Ok((url, value))
    }

    /// Run a request and return the parsed JSON body. An empty 2xx body is `null`.
    pub async fn fetch_json(&self, request: ApiRequest) -> Result<Value, ApiError> {
        self.send(request).await.map(|(_, value)| value)
    }

    /// Run a request and map the body as one record.
    pub async fn fetch_record<T: FromWire>(&self, request: ApiRequest) -> Result<T, ApiError> {
        let (url, value) = self.send(request).await?;
        T::from_value(&value).map_err(|e| ApiError::decode(&url, e))
    }

    /// Run a request and map the body as an array of records.
    pub async fn fetch_records<T: FromWire>(&self, request: ApiRequest) -> Result<Vec<T>, ApiError> {
        let (url, value) = self.send(request).await?;
        T::from_array(&value).map_err(|e| ApiError::decode(&url, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(base).unwrap()
    }

    #[test]
    fn request_url_normalizes_and_adds_query() {
        let url = client("http://localhost:3000")
            .request_url("/zones", &Query::new().param("limit", Some(50)))
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/api/v1/zones/?limit=50");
    }

    #[test]
    fn request_url_keeps_base_path() {
        let url = client("http://localhost:3000/dashboard/")
            .request_url("devices/dev-1", &Query::new())
            .unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/dashboard/api/v1/devices/dev-1/");
    }

    #[test]
    fn image_file_url_is_absolute_on_the_client_origin() {
        let c = client("http://gw.local:3000/");
        let rel = device_image_file_url("d1", "img 1");
        assert_eq!(
            c.image_file_url(&rel),
            "http://gw.local:3000/api/v1/devices/d1/images/img%201/file"
        );
    }

    #[test]
    fn bad_base_url_is_rejected() {
        assert!(matches!(
            ApiClient::new("not a url"),
            Err(ApiError::InvalidUrl { .. })
        ));
    }
}
