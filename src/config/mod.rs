//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! gateway.toml (optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → GatewayConfig (validated, immutable)
//!
//! NEXT_PUBLIC_BACKEND_URL / BACKEND_URL
//!     → upstream.rs (resolve once at startup)
//!     → UpstreamConfig, passed by value into the server and proxy
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no hot reload
//! - All fields have defaults to allow minimal configs
//! - The upstream base URL is resolved before the listener binds, so a
//!   missing backend URL can never surface as a per-request failure

pub mod loader;
pub mod schema;
pub mod upstream;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    GatewayConfig, ListenerConfig, LogFormat, ObservabilityConfig, ProxyConfig, TlsConfig,
    UpstreamSettings,
};
pub use upstream::{UpstreamConfig, UpstreamError, API_PREFIX, BACKEND_URL_VAR, PUBLIC_BACKEND_URL_VAR};
pub use validation::{validate_config, ValidationError};
