//! Configuration validation.
//!
//! Validation is a pure function over [`GatewayConfig`] that returns every
//! problem it finds rather than stopping at the first one.

use std::fmt;

use axum::http::HeaderValue;
use url::Url;

use crate::config::schema::GatewayConfig;
use crate::security::has_dot_segment;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending field, e.g. `upstream.prefix`.
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Check a configuration for semantic errors.
pub fn validate_config(config: &GatewayConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.socket_path.as_os_str().is_empty() {
        errors.push(ValidationError::new(
            "listener.socket_path",
            "must not be empty",
        ));
    }

    let upstream = &config.upstream;
    match Url::parse(&upstream.base_url) {
        Ok(url) => {
            if url.scheme() != "http" && url.scheme() != "https" {
                errors.push(ValidationError::new(
                    "upstream.base_url",
                    format!("unsupported scheme '{}'", url.scheme()),
                ));
            }
            if url.host_str().is_none() {
                errors.push(ValidationError::new("upstream.base_url", "missing host"));
            }
        }
        Err(e) => errors.push(ValidationError::new("upstream.base_url", e.to_string())),
    }

    if !upstream.prefix.starts_with('/') {
        errors.push(ValidationError::new("upstream.prefix", "must start with '/'"));
    } else if upstream.prefix == "/" || upstream.prefix.ends_with('/') {
        errors.push(ValidationError::new(
            "upstream.prefix",
            "must name a path segment and not end with '/'",
        ));
    }

    if !upstream.base_path.starts_with('/') {
        errors.push(ValidationError::new(
            "upstream.base_path",
            "must start with '/'",
        ));
    } else if has_dot_segment(&upstream.base_path) {
        errors.push(ValidationError::new(
            "upstream.base_path",
            "must not contain '.' or '..' segments",
        ));
    }

    if upstream.credential_env.trim().is_empty() {
        errors.push(ValidationError::new(
            "upstream.credential_env",
            "must name an environment variable",
        ));
    }

    if HeaderValue::from_str(&upstream.content_type).is_err() {
        errors.push(ValidationError::new(
            "upstream.content_type",
            "not a valid header value",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
