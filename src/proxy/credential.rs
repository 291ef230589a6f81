//! Upstream credential handling.
//!
//! The credential is read once at startup and injected into every forwarded
//! request. The calling process never sees it: it is not echoed back, not
//! logged, and the header carrying it is marked sensitive so `Debug` output of
//! a request never shows it.

use std::fmt;

use axum::http::HeaderValue;
use tracing::{debug, warn};
use zeroize::Zeroizing;

/// Bearer secret for the upstream API.
///
/// An empty credential is valid: requests still carry `Authorization: Bearer `
/// so the caller observes the upstream's own authentication failure.
#[derive(Clone)]
pub struct Credential {
    secret: Zeroizing<String>,
}

impl Credential {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: Zeroizing::new(secret.into()),
        }
    }

    /// Read the credential from `var`, treating an unset or non-UTF-8
    /// variable as empty.
    pub fn from_env(var: &str) -> Self {
        match std::env::var(var) {
            Ok(secret) => {
                debug!(variable = var, "Loaded upstream credential");
                Self::new(secret)
            }
            Err(e) => {
                warn!(variable = var, reason = %e, "Upstream credential unavailable, forwarding with an empty bearer token");
                Self::new(String::new())
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.secret.is_empty()
    }

    /// `Authorization` header value for this credential.
    ///
    /// Falls back to a bare `Bearer ` when the secret holds bytes that are
    /// not allowed in a header value.
    pub fn bearer_header(&self) -> HeaderValue {
        let formatted = Zeroizing::new(format!("Bearer {}", self.secret.as_str()));
        let mut value = HeaderValue::from_str(&formatted).unwrap_or_else(|_| {
            warn!("Upstream credential is not a valid header value, sending an empty bearer token");
            HeaderValue::from_static("Bearer ")
        });
        value.set_sensitive(true);
        value
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}
