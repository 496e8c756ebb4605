//! Network layer subsystem.
//!
//! # Data Flow
//! ```text
//! Configured bind address
//!     → listener.rs (parse, bind plain TCP)
//!     → tls.rs (optional: load PEM cert/key for axum-server)
//!     → Hand off to http::server
//! ```

pub mod listener;
pub mod tls;

pub use listener::{bind, bind_address, ListenerError};
