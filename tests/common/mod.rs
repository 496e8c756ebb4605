//! Shared helpers for integration tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use tokio::net::TcpListener;

use irrigation_gateway::config::{GatewayConfig, UpstreamConfig};
use irrigation_gateway::http::GatewayServer;
use irrigation_gateway::lifecycle::Shutdown;

pub const ZONE_ID: &str = "6a1f0c3e-2b4d-4c8e-9f10-3a5b7c9d1e2f";
pub const SENSOR_ID: &str = "0d9c8b7a-6f5e-4d3c-8b2a-19f8e7d6c5b4";

/// A running gateway bound to an ephemeral port.
pub struct TestGateway {
    pub origin: String,
    shutdown: Shutdown,
}

impl TestGateway {
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.origin)
    }
}

impl Drop for TestGateway {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a gateway forwarding to `upstream`.
pub async fn spawn_gateway(upstream: &str) -> TestGateway {
    spawn_gateway_with(upstream, GatewayConfig::default()).await
}

pub async fn spawn_gateway_with(upstream: &str, config: GatewayConfig) -> TestGateway {
    let upstream = UpstreamConfig::parse(upstream).unwrap();
    let server = GatewayServer::new(config, upstream).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    tokio::spawn(server.run(listener, rx));

    TestGateway {
        origin: format!("http://{addr}"),
        shutdown,
    }
}

/// Client that never follows redirects, so tests see exactly what the
/// gateway returns.
pub fn raw_client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .build()
        .unwrap()
}

pub fn zone_json(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "is_active": true,
        "created_at": "2024-06-15T10:30:00Z",
        "updated_at": "2024-06-15T10:30:00Z",
        "deleted_at": null
    })
}

pub fn sensor_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Bed 3 moisture",
        "type": "humidity",
        "unit": "%",
        "is_active": true,
        "zone_id": ZONE_ID,
        "plant_id": null,
        "created_at": "2024-06-15T10:30:00Z",
        "updated_at": "2024-06-15T10:30:00Z"
    })
}
