//! End-to-end tests for the `/api/v1` proxy route against a mock backend.

use std::io::Write;

use flate2::write::GzEncoder;
use flate2::Compression;
use futures_util::stream;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use irrigation_gateway::config::{UpstreamConfig, UpstreamError, UpstreamSettings};

mod common;
use common::{raw_client, spawn_gateway, zone_json, ZONE_ID};

#[tokio::test]
async fn collection_path_keeps_trailing_slash() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/zones/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&backend)
        .await;

    let gateway = spawn_gateway(&backend.uri()).await;
    let response = raw_client()
        .get(gateway.url("/api/v1/zones/"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "[]");
}

#[tokio::test]
async fn resource_path_is_forwarded_without_slash() {
    let backend = MockServer::start().await;
    let resource = format!("/api/v1/zones/{ZONE_ID}");
    Mock::given(method("GET"))
        .and(path(resource.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(zone_json(ZONE_ID, "North")))
        .expect(1)
        .mount(&backend)
        .await;

    let gateway = spawn_gateway(&backend.uri()).await;
    let response = raw_client().get(gateway.url(&resource)).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn query_string_passes_through_verbatim() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/sensor-readings/"))
        .and(query_param("sensor_id", "abc"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&backend)
        .await;

    let gateway = spawn_gateway(&backend.uri()).await;
    let response = raw_client()
        .get(gateway.url("/api/v1/sensor-readings/?sensor_id=abc&limit=5"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn host_header_is_replaced_by_upstream_host() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&backend)
        .await;

    let gateway = spawn_gateway(&backend.uri()).await;
    raw_client()
        .get(gateway.url("/api/v1/devices/"))
        .header("x-trace-tag", "dashboard")
        .send()
        .await
        .unwrap();

    let received = backend.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    let host = received[0].headers.get("host").unwrap().to_str().unwrap();
    let backend_host = backend.address().to_string();
    assert_eq!(host, backend_host);
    // other inbound headers survive
    assert_eq!(received[0].headers.get("x-trace-tag").unwrap(), "dashboard");
    assert!(received[0].headers.contains_key("x-request-id"));
}

#[tokio::test]
async fn json_body_and_method_are_forwarded() {
    let backend = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path(format!("/api/v1/zones/{ZONE_ID}").as_str()))
        .and(header("content-type", "application/json"))
        .and(body_string(r#"{"name":"South"}"#))
        .respond_with(ResponseTemplate::new(200).set_body_json(zone_json(ZONE_ID, "South")))
        .expect(1)
        .mount(&backend)
        .await;

    let gateway = spawn_gateway(&backend.uri()).await;
    let response = raw_client()
        .put(gateway.url(&format!("/api/v1/zones/{ZONE_ID}")))
        .header("content-type", "application/json")
        .body(r#"{"name":"South"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn redirects_are_followed_server_side() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/irrigation"))
        .respond_with(
            ResponseTemplate::new(307).insert_header("location", "/api/v1/irrigation/"),
        )
        .mount(&backend)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/v1/irrigation/"))
        .and(body_string(r#"{"scope":"zone"}"#))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "j1" })))
        .expect(1)
        .mount(&backend)
        .await;

    let gateway = spawn_gateway(&backend.uri()).await;
    let response = raw_client()
        .post(gateway.url("/api/v1/irrigation"))
        .body(r#"{"scope":"zone"}"#)
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(response.headers().get("location").is_none());
}

#[tokio::test]
async fn streamed_body_redirect_is_relayed() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/external-devices/d1/images/"))
        .respond_with(ResponseTemplate::new(307).insert_header("location", "/elsewhere/"))
        .mount(&backend)
        .await;

    let gateway = spawn_gateway(&backend.uri()).await;
    let chunks: Vec<Result<&'static [u8], std::io::Error>> = vec![Ok(b"part-1"), Ok(b"part-2")];
    let response = raw_client()
        .post(gateway.url("/api/v1/external-devices/d1/images/"))
        .body(reqwest::Body::wrap_stream(stream::iter(chunks)))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers().get("location").unwrap(), "/elsewhere/");
}

#[tokio::test]
async fn streamed_body_reaches_the_backend() {
    let backend = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/external-devices/d1/telemetry/"))
        .and(body_string("part-1part-2"))
        .respond_with(ResponseTemplate::new(202))
        .expect(1)
        .mount(&backend)
        .await;

    let gateway = spawn_gateway(&backend.uri()).await;
    let chunks: Vec<Result<&'static [u8], std::io::Error>> = vec![Ok(b"part-1"), Ok(b"part-2")];
    let response = raw_client()
        .post(gateway.url("/api/v1/external-devices/d1/telemetry/"))
        .body(reqwest::Body::wrap_stream(stream::iter(chunks)))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn content_encoding_is_stripped_from_response() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-encoding", "identity")
                .insert_header("x-backend", "fastapi")
                .set_body_string("[]"),
        )
        .mount(&backend)
        .await;

    let gateway = spawn_gateway(&backend.uri()).await;
    let response = raw_client()
        .get(gateway.url("/api/v1/plants/"))
        .send()
        .await
        .unwrap();

    assert!(response.headers().get("content-encoding").is_none());
    assert_eq!(response.headers().get("x-backend").unwrap(), "fastapi");
    assert_eq!(response.text().await.unwrap(), "[]");
}

#[tokio::test]
async fn gzip_response_is_relayed_decoded() {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(br#"[{"id":"z"}]"#).unwrap();
    let compressed = encoder.finish().unwrap();

    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/zones/"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-encoding", "gzip")
                .insert_header("content-type", "application/json")
                .set_body_bytes(compressed),
        )
        .expect(1)
        .mount(&backend)
        .await;

    let gateway = spawn_gateway(&backend.uri()).await;
    let response = raw_client()
        .get(gateway.url("/api/v1/zones/"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("content-encoding").is_none());
    assert_eq!(response.text().await.unwrap(), r#"[{"id":"z"}]"#);
}

#[tokio::test]
async fn upstream_errors_are_relayed_untouched() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({ "detail": "Not Found" })))
        .expect(1)
        .mount(&backend)
        .await;

    let gateway = spawn_gateway(&backend.uri()).await;
    let response = raw_client()
        .get(gateway.url("/api/v1/devices/missing/"))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<serde_json::Value>().await.unwrap(),
        json!({ "detail": "Not Found" })
    );
}

#[tokio::test]
async fn request_id_is_echoed_back() {
    let backend = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("x-request-id", "req-42"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&backend)
        .await;

    let gateway = spawn_gateway(&backend.uri()).await;
    let response = raw_client()
        .get(gateway.url("/api/v1/zones/"))
        .header("x-request-id", "req-42")
        .send()
        .await
        .unwrap();
    assert_eq!(response.headers().get("x-request-id").unwrap(), "req-42");
}

#[tokio::test]
async fn missing_backend_url_is_a_startup_error() {
    let err = UpstreamConfig::resolve(&UpstreamSettings::default(), |_| None).unwrap_err();
    assert!(matches!(err, UpstreamError::Missing));
    let message = err.to_string();
    assert!(message.contains("NEXT_PUBLIC_BACKEND_URL"));
    assert!(message.contains("BACKEND_URL"));
    assert!(message.contains("http://localhost:8000"));
}
