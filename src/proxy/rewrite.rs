//! Request rewriting for the upstream hop.
//!
//! Every proxy-eligible request is turned into an [`OutboundRequest`] by
//! applying, in order:
//!
//! 1. `Host` header set to the upstream authority
//! 2. URL scheme and host set to the upstream's
//! 3. `Content-Type` forced to the configured value
//! 4. `Authorization` forced to `Bearer <credential>`
//! 5. every occurrence of the prefix in the path replaced by the base path
//!
//! Hop-by-hop headers are dropped before the rules run. All other caller
//! headers, the method and the query string pass through untouched.

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, HOST};
use axum::http::request::Parts;
use axum::http::{HeaderMap, HeaderValue, Method};
use url::Url;

use crate::config::UpstreamConfig;
use crate::error::{GatewayError, Result};
use crate::proxy::credential::Credential;
use crate::security::strip_hop_by_hop;

/// The fixed forwarding destination, parsed once at startup.
#[derive(Debug, Clone)]
pub struct UpstreamTarget {
    base: Url,
    authority: HeaderValue,
    prefix: String,
    base_path: String,
    content_type: HeaderValue,
}

/// A request after rewriting, ready to hand to the forwarder.
#[derive(Debug)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: Url,
    pub headers: HeaderMap,
}

impl UpstreamTarget {
    pub fn from_config(config: &UpstreamConfig) -> Result<Self> {
        let invalid = |reason: String| GatewayError::InvalidUpstream {
            url: config.base_url.clone(),
            reason,
        };

        let base = Url::parse(&config.base_url).map_err(|e| invalid(e.to_string()))?;
        let host = base
            .host_str()
            .ok_or_else(|| invalid("missing host".to_string()))?;
        let authority = match base.port() {
            Some(port) => format!("{host}:{port}"),
            None => host.to_string(),
        };
        let authority = HeaderValue::from_str(&authority).map_err(|e| invalid(e.to_string()))?;
        let content_type = HeaderValue::from_str(&config.content_type)
            .map_err(|e| invalid(format!("content type: {e}")))?;

        Ok(Self {
            base,
            authority,
            prefix: config.prefix.clone(),
            base_path: config.base_path.clone(),
            content_type,
        })
    }

    /// Local path prefix this target serves.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Apply the rewrite rules to an inbound request head.
    pub fn rewrite(&self, parts: Parts, credential: &Credential) -> OutboundRequest {
        let Parts {
            method,
            uri,
            mut headers,
            ..
        } = parts;

        strip_hop_by_hop(&mut headers);

        headers.insert(HOST, self.authority.clone());

        let mut url = self.base.clone();

        headers.insert(CONTENT_TYPE, self.content_type.clone());
        headers.insert(AUTHORIZATION, credential.bearer_header());

        let path = rewrite_path(uri.path(), &self.prefix, &self.base_path);
        let joined = format!("{}{}", self.base.path().trim_end_matches('/'), path);
        url.set_path(&joined);
        url.set_query(uri.query());

        OutboundRequest {
            method,
            url,
            headers,
        }
    }
}

/// Replace every occurrence of `prefix` in `path` with `base_path`.
///
/// This is a global substring replacement, not a leading-prefix strip:
/// `/openai/foo/openai/bar` becomes `/v1/foo/v1/bar`. Callers relying on
/// the prefix appearing inside opaque identifiers will see it rewritten too.
pub fn rewrite_path(path: &str, prefix: &str, base_path: &str) -> String {
    path.replace(prefix, base_path)
}
