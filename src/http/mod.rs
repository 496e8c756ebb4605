//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP/TLS connection
//!     → server.rs (Axum setup, middleware)
//!     → request.rs (request ID, upstream path, forwarded headers)
//!     → proxy.rs (build upstream request, follow redirects)
//!     → response.rs (strip Content-Encoding, stream body)
//!     → Send to client
//! ```

pub mod proxy;
pub mod request;
pub mod response;
pub mod server;

pub use proxy::{ProxyError, ProxyState};
pub use request::X_REQUEST_ID;
pub use server::GatewayServer;
