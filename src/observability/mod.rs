//! Observability subsystem.
//!
//! Structured logging through `tracing`. Every request gets an access-log
//! span from the HTTP layer, and the proxy logs each rewritten upstream URL.
//! The upstream credential is never recorded as a field or message argument.

pub mod logging;

pub use logging::init;
