//! Credentialed reverse proxy.
//!
//! # Data Flow
//! ```text
//! inbound request under <prefix>
//!     → rewrite.rs (host, scheme, content type, credential, path)
//!     → forward.rs (streaming upstream call)
//!     → upstream response relayed unchanged, minus hop-by-hop headers
//! ```
//!
//! Each request is independent. The only shared state is the
//! [`UpstreamTarget`] and [`Credential`], both fixed at startup.

pub mod credential;
pub mod forward;
pub mod rewrite;

pub use credential::Credential;
pub use forward::Forwarder;
pub use rewrite::{rewrite_path, OutboundRequest, UpstreamTarget};
