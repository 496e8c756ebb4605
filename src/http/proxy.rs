//! Same-origin proxy route.
//!
//! # Responsibilities
//! - Accept any supported verb under `/api/v1/{*path}`
//! - Forward method, headers (minus `Host`), query and body to the backend
//! - Follow backend redirects server-side
//! - Relay the final status, headers (minus `Content-Encoding`) and body
//!
//! # Design Decisions
//! - Stateless: nothing survives a request except the shared HTTP client
//! - GET/HEAD never read or forward a body
//! - Bodies with a small declared length are collected so a 307/308 can
//!   resend them; everything else is streamed
//! - No retries; upstream error statuses are relayed untouched

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderMap, Method, Request, StatusCode};
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use url::Url;

use crate::config::{ProxyConfig, UpstreamConfig};
use crate::http::request::{forward_headers, request_id, upstream_path};
use crate::http::response::relay;
use crate::observability::metrics;

/// Errors produced by the proxy itself, as opposed to relayed upstream statuses.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("failed to build upstream HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("invalid upstream URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to read request body: {0}")]
    Body(#[source] axum::Error),

    #[error("upstream request failed: {0}")]
    Upstream(#[source] reqwest::Error),
}

impl ProxyError {
    fn status(&self) -> StatusCode {
        match self {
            ProxyError::Client(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::InvalidUrl { .. } | ProxyError::Body(_) => StatusCode::BAD_REQUEST,
            ProxyError::Upstream(e) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            ProxyError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Shared state for the proxy route.
#[derive(Clone)]
pub struct ProxyState {
    client: reqwest::Client,
    upstream: Arc<UpstreamConfig>,
    replay_limit: usize,
}

impl ProxyState {
    /// Build the proxy state around a resolved upstream.
    pub fn new(upstream: UpstreamConfig, config: &ProxyConfig) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(config.max_redirects))
            .no_proxy()
            .pool_idle_timeout(Duration::from_secs(90))
            .build()
            .map_err(ProxyError::Client)?;

        Ok(Self {
            client,
            upstream: Arc::new(upstream),
            replay_limit: config.replay_limit_bytes,
        })
    }

    /// The resolved upstream.
    pub fn upstream(&self) -> &UpstreamConfig {
        &self.upstream
    }

    /// Full upstream URL for an inbound path and optional query.
    pub fn upstream_url(&self, inbound_path: &str, query: Option<&str>) -> Result<Url, ProxyError> {
        let mut url = format!("{}{}", self.upstream.api_base(), upstream_path(inbound_path));
        if let Some(query) = query.filter(|q| !q.is_empty()) {
            url.push('?');
            url.push_str(query);
        }
        Url::parse(&url).map_err(|source| ProxyError::InvalidUrl { url, source })
    }

    async fn upstream_body(
        &self,
        method: &Method,
        headers: &HeaderMap,
        body: Body,
    ) -> Result<Option<reqwest::Body>, ProxyError> {
        if *method == Method::GET || *method == Method::HEAD {
            return Ok(None);
        }

        let declared = headers
            .get(header::CONTENT_LENGTH)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse::<usize>().ok());

        match declared {
            Some(len) if len <= self.replay_limit => {
                let bytes = axum::body::to_bytes(body, self.replay_limit)
                    .await
                    .map_err(ProxyError::Body)?;
                Ok(Some(reqwest::Body::from(bytes)))
            }
            _ => Ok(Some(reqwest::Body::wrap_stream(body.into_data_stream()))),
        }
    }

    /// Forward one request and relay the backend's answer.
    pub async fn forward(&self, request: Request<Body>) -> Result<Response, ProxyError> {
        let (parts, body) = request.into_parts();
        let url = self.upstream_url(parts.uri.path(), parts.uri.query())?;
        let headers = forward_headers(&parts.headers);
        let body = self.upstream_body(&parts.method, &parts.headers, body).await?;

        let mut upstream_request = self
            .client
            .request(parts.method.clone(), url)
            .headers(headers);
        if let Some(body) = body {
            upstream_request = upstream_request.body(body);
        }

        let response = upstream_request.send().await.map_err(ProxyError::Upstream)?;
        Ok(relay(response))
    }
}

/// Wildcard handler mounted under the API prefix.
pub async fn proxy_handler(State(state): State<ProxyState>, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let request_id = request_id(request.headers()).to_string();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    tracing::debug!(
        request_id = %request_id,
        method = %method,
        path = %path,
        "Proxying request"
    );

    let response = match state.forward(request).await {
        Ok(response) => response,
        Err(e) => {
            tracing::error!(
                request_id = %request_id,
                method = %method,
                path = %path,
                error = %e,
                "Proxy error"
            );
            if matches!(e, ProxyError::Upstream(_)) {
                metrics::record_upstream_error(method.as_str());
            }
            e.into_response()
        }
    };

    metrics::record_request(method.as_str(), response.status().as_u16(), start_time);
    response
}
