//! Guest-side request gateway.
//!
//! Listens on a Unix domain socket and forwards every request under a fixed
//! path prefix to a single upstream API, injecting a bearer credential the
//! caller never sees.
//!
//! # Architecture Overview
//!
//! ```text
//!                         ┌──────────────────────────────────────────────┐
//!                         │                 GATEWAY                      │
//!   Caller (in guest)     │  ┌─────────┐   ┌─────────┐   ┌────────────┐  │
//!   ──────────────────────┼─▶│   net   │──▶│  http   │──▶│   proxy    │  │
//!     unix socket         │  │listener │   │ server  │   │  rewrite   │  │
//!                         │  └─────────┘   └────┬────┘   └─────┬──────┘  │
//!                         │                     │ 404          │         │
//!                         │                     ▼              ▼         │
//!   ◀─────────────────────┼──────────────── response ◀── ┌────────────┐  │
//!                         │                              │   proxy    │◀─┼──── Upstream API
//!                         │                              │  forward   │──┼───▶ (HTTPS)
//!                         │                              └────────────┘  │
//!                         └──────────────────────────────────────────────┘
//! ```
//!
//! Unix-only: the listener is a filesystem socket.

pub mod cli;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod net;
pub mod observability;
pub mod proxy;
pub mod security;

pub use config::GatewayConfig;
pub use error::{GatewayError, Result};
pub use http::GatewayServer;
pub use lifecycle::Shutdown;
pub use proxy::Credential;
