//! Irrigation dashboard gateway.
//!
//! Two halves share this crate:
//! - a same-origin reverse proxy that forwards `/api/v1/*` to the irrigation
//!   backend ([`http`])
//! - a typed async client for that API ([`client`]) with the domain records
//!   it maps responses into ([`models`])

pub mod client;
pub mod config;
pub mod http;
pub mod lifecycle;
pub mod models;
pub mod net;
pub mod observability;

pub use client::{ApiClient, ApiError};
pub use config::{GatewayConfig, UpstreamConfig};
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
