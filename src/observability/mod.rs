//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Proxy handler and client produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty for development, JSON for aggregation)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID flows from the inbound request to the backend and back
//! - Metric updates are no-ops until a recorder is installed

pub mod logging;
pub mod metrics;
