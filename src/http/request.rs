//! Request handling and transformation.
//!
//! # Responsibilities
//! - Generate a unique request ID (UUID v4) when the caller sent none
//! - Compute the upstream path from the inbound wildcard path
//! - Prepare the header set forwarded to the backend
//!
//! # Design Decisions
//! - Request ID added as early as possible for tracing
//! - Forwarded headers are a clone of the inbound set minus `Host`; the
//!   upstream client fills `Host` in from the target URL

use axum::http::{header, HeaderMap, HeaderName};
use tower_http::request_id::{
    MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer,
};

use crate::config::API_PREFIX;

/// Header carrying the correlation ID.
pub static X_REQUEST_ID: HeaderName = HeaderName::from_static("x-request-id");

/// Layer that stamps `x-request-id` on requests that lack one.
pub fn set_request_id_layer() -> SetRequestIdLayer<MakeRequestUuid> {
    SetRequestIdLayer::new(X_REQUEST_ID.clone(), MakeRequestUuid)
}

/// Layer that copies `x-request-id` from the request onto the response.
pub fn propagate_request_id_layer() -> PropagateRequestIdLayer {
    PropagateRequestIdLayer::new(X_REQUEST_ID.clone())
}

/// Read the request ID, if any, for logging.
pub fn request_id(headers: &HeaderMap) -> &str {
    headers
        .get(&X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
}

/// Map an inbound path under the mount prefix onto the upstream path.
///
/// Empty segments are dropped and the remaining segments rejoined. A trailing
/// slash on the inbound path is preserved because the backend routes
/// `/zones` and `/zones/` differently.
pub fn upstream_path(inbound_path: &str) -> String {
    let rest = inbound_path
        .strip_prefix(API_PREFIX)
        .unwrap_or(inbound_path);

    let joined = rest
        .split('/')
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    let mut path = format!("/{joined}");
    if inbound_path.ends_with('/') && !path.ends_with('/') {
        path.push('/');
    }
    path
}

/// Clone the inbound headers for forwarding, minus `Host`.
pub fn forward_headers(inbound: &HeaderMap) -> HeaderMap {
    let mut headers = inbound.clone();
    headers.remove(header::HOST);
    headers
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn trailing_slash_survives() {
        assert_eq!(upstream_path("/api/v1/zones/"), "/zones/");
        assert_eq!(upstream_path("/api/v1/zones/abc"), "/zones/abc");
    }

    #[test]
    fn empty_segments_collapse() {
        assert_eq!(upstream_path("/api/v1//devices///abc"), "/devices/abc");
        assert_eq!(upstream_path("/api/v1/"), "/");
    }

    #[test]
    fn encoded_segments_are_untouched() {
        assert_eq!(
            upstream_path("/api/v1/devices/a%2Fb/images/by-type/top%20view/file"),
            "/devices/a%2Fb/images/by-type/top%20view/file"
        );
    }

    #[test]
    fn host_is_stripped_everything_else_kept() {
        let mut inbound = HeaderMap::new();
        inbound.insert(header::HOST, HeaderValue::from_static("dashboard.local"));
        inbound.insert(header::AUTHORIZATION, HeaderValue::from_static("Bearer t"));
        inbound.append("x-trace", HeaderValue::from_static("a"));
        inbound.append("x-trace", HeaderValue::from_static("b"));

        let forwarded = forward_headers(&inbound);
        assert!(forwarded.get(header::HOST).is_none());
        assert_eq!(forwarded.get(header::AUTHORIZATION).unwrap(), "Bearer t");
        assert_eq!(forwarded.get_all("x-trace").iter().count(), 2);
    }

    #[test]
    fn missing_request_id_reads_as_unknown() {
        assert_eq!(request_id(&HeaderMap::new()), "unknown");
    }
}
