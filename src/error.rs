//! Error types for the gateway.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::loader::ConfigError;

/// Errors raised while assembling or running the gateway.
///
/// Per-request upstream failures are not represented here: they are relayed
/// to the caller as HTTP responses and never surface as a `GatewayError`.
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("failed to bind socket {}: {source}", .path.display())]
    Bind {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid upstream URL '{url}': {reason}")]
    InvalidUpstream { url: String, reason: String },

    #[error("failed to build upstream client: {0}")]
    Client(#[from] reqwest::Error),
}

/// Result type alias for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;
