//! Irrigation gateway binary.
//!
//! # Architecture Overview
//!
//! ```text
//!     Browser / CLI                 GATEWAY                          Backend
//!     ─────────────┐   ┌──────────────────────────────────────┐
//!                  │   │  net      http::server    http::proxy │
//!     /api/v1/* ───┼──▶│ listener ─▶ request-id ─▶ forward ────┼──▶ <base>/api/v1/*
//!                  │   │            trace         follow 3xx   │
//!     ◀────────────┼───│ ◀── relay status, headers, body ◀─────┼───
//!                  │   │                                       │
//!                  │   │  config  observability  lifecycle     │
//!                  │   └──────────────────────────────────────┘
//! ```
//!
//! Startup order: config, logging, upstream resolution, metrics, bind.
//! A missing backend URL stops the process before anything listens.

use std::path::PathBuf;

use clap::Parser;

use irrigation_gateway::config::{load_config, GatewayConfig, UpstreamConfig};
use irrigation_gateway::http::GatewayServer;
use irrigation_gateway::lifecycle::{signals::shutdown_on_signal, Shutdown};
use irrigation_gateway::{net, observability};

#[derive(Parser)]
#[command(name = "irrigation-gateway", version)]
#[command(about = "Same-origin API gateway for the irrigation dashboard", long_about = None)]
struct Args {
    /// TOML config file; defaults apply when omitted.
    #[arg(short, long, env = "IRRIGATION_GATEWAY_CONFIG")]
    config: Option<PathBuf>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GatewayConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }

    observability::logging::init(&config.observability);
    tracing::info!("irrigation-gateway v{} starting", env!("CARGO_PKG_VERSION"));

    let upstream = match UpstreamConfig::from_env(&config.upstream) {
        Ok(upstream) => upstream,
        Err(e) => {
            tracing::error!(error = %e, "Upstream not configured");
            return Err(e.into());
        }
    };

    tracing::info!(
        upstream = %upstream.base_url(),
        bind_address = %config.listener.bind_address,
        tls = config.listener.tls.is_some(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr = config.observability.metrics_address.parse()?;
        observability::metrics::init_metrics(addr)?;
    }

    let shutdown = Shutdown::new();
    let shutdown_rx = shutdown.subscribe();
    tokio::spawn(shutdown_on_signal(shutdown));

    let tls = config.listener.tls.clone();
    let listener_config = config.listener.clone();
    let server = GatewayServer::new(config, upstream)?;

    match tls {
        Some(tls) => {
            let addr = net::bind_address(&listener_config)?;
            server.run_tls(addr, &tls, shutdown_rx).await?;
        }
        None => {
            let listener = net::bind(&listener_config).await?;
            server.run(listener, shutdown_rx).await?;
        }
    }

    tracing::info!("Shutdown complete");
    Ok(())
}
