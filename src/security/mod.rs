//! Security-related request and response handling.
//!
//! The credential itself lives in [`crate::proxy::credential`]; this module
//! keeps connection-scoped headers from crossing the gateway and refuses
//! request paths that would escape the upstream base path.

pub mod headers;
pub mod path;

pub use headers::strip_hop_by_hop;
pub use path::has_dot_segment;
