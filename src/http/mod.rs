//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! Unix socket connection
//!     → server.rs (Axum setup, access log, prefix routing)
//!     → proxy::rewrite (outbound request head)
//!     → proxy::forward (streamed upstream call)
//!     → Send upstream response to client
//! ```

pub mod server;

pub use server::{AppState, GatewayServer};
