//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the gateway.
//! All types derive Serde traits for deserialization from config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default location of the guest-side socket.
pub const DEFAULT_SOCKET_PATH: &str = "/run/guest/volumes-service.sock";

/// Root configuration for the gateway.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct GatewayConfig {
    /// Listener configuration (socket path).
    pub listener: ListenerConfig,

    /// The single upstream requests are forwarded to.
    pub upstream: UpstreamConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Filesystem path of the Unix domain socket to listen on.
    pub socket_path: PathBuf,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            socket_path: PathBuf::from(DEFAULT_SOCKET_PATH),
        }
    }
}

/// Upstream and rewrite configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the upstream API (scheme + host, optional port).
    pub base_url: String,

    /// Local path prefix that marks a request as proxy-eligible.
    pub prefix: String,

    /// Path substituted for every occurrence of `prefix`.
    pub base_path: String,

    /// Environment variable holding the bearer credential.
    pub credential_env: String,

    /// Content-Type forced onto every forwarded request.
    pub content_type: String,

    /// Honor `HTTP_PROXY`/`HTTPS_PROXY` style variables for the upstream client.
    pub use_env_proxy: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.openai.com".to_string(),
            prefix: "/openai".to_string(),
            base_path: "/v1".to_string(),
            credential_env: "OPENAI_API_KEY".to_string(),
            content_type: "application/json".to_string(),
            use_env_proxy: true,
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human readable, one event per line.
    #[default]
    Pretty,
    /// Newline-delimited JSON.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Output format for log lines.
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}
