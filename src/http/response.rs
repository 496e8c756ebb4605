//! Response handling and transformation.
//!
//! # Responsibilities
//! - Relay the upstream status and headers to the caller
//! - Stream the upstream body without buffering it
//!
//! # Design Decisions
//! - `Content-Encoding` is always dropped: the upstream client has already
//!   decoded the body, so the header would make browsers decode twice
//! - Every other header, including repeated ones, is relayed as-is

use axum::body::Body;
use axum::http::{header, HeaderMap};
use axum::response::Response;

/// Headers relayed to the caller for an upstream response.
pub fn relay_headers(upstream: &HeaderMap) -> HeaderMap {
    let mut headers = upstream.clone();
    headers.remove(header::CONTENT_ENCODING);
    headers
}

/// Turn an upstream response into the caller's response.
pub fn relay(upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let headers = relay_headers(upstream.headers());

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn content_encoding_is_removed() {
        let mut upstream = HeaderMap::new();
        upstream.insert(header::CONTENT_ENCODING, HeaderValue::from_static("gzip"));
        upstream.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
        upstream.append(header::SET_COOKIE, HeaderValue::from_static("a=1"));
        upstream.append(header::SET_COOKIE, HeaderValue::from_static("b=2"));

        let relayed = relay_headers(&upstream);
        assert!(relayed.get(header::CONTENT_ENCODING).is_none());
        assert_eq!(relayed.get(header::CONTENT_TYPE).unwrap(), "application/json");
        assert_eq!(relayed.get_all(header::SET_COOKIE).iter().count(), 2);
    }

    #[test]
    fn headers_without_encoding_pass_through() {
        let mut upstream = HeaderMap::new();
        upstream.insert(header::CACHE_CONTROL, HeaderValue::from_static("no-store"));
        assert_eq!(relay_headers(&upstream), upstream);
    }
}
