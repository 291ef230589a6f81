//! Streaming forwarder to the upstream.
//!
//! Request and response bodies are relayed as byte streams, so uploads and
//! long streamed completions never sit in memory in full. Upstream statuses
//! are passed through verbatim; only transport failures produce a local
//! `502 Bad Gateway`.

use axum::body::{Body, HttpBody};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::{info, warn};

use crate::config::UpstreamConfig;
use crate::error::Result;
use crate::proxy::rewrite::OutboundRequest;
use crate::security::strip_hop_by_hop;

/// HTTP client for the upstream hop.
///
/// Redirects are not followed and no timeout is imposed: a slow upstream
/// only holds the request that is waiting on it.
#[derive(Debug, Clone)]
pub struct Forwarder {
    client: reqwest::Client,
}

impl Forwarder {
    pub fn new(config: &UpstreamConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().redirect(reqwest::redirect::Policy::none());
        if !config.use_env_proxy {
            builder = builder.no_proxy();
        }

        Ok(Self {
            client: builder.build()?,
        })
    }

    /// Send a rewritten request upstream and relay whatever comes back.
    pub async fn forward(&self, outbound: OutboundRequest, body: Body) -> Response {
        let OutboundRequest {
            method,
            url,
            headers,
        } = outbound;

        info!(method = %method, url = %url, "Send request to upstream");

        let mut request = self.client.request(method, url.clone()).headers(headers);
        if body.size_hint().exact() != Some(0) {
            request = request.body(reqwest::Body::wrap_stream(body.into_data_stream()));
        }

        match request.send().await {
            Ok(upstream) => relay(upstream),
            Err(e) => {
                warn!(url = %url, error = %e, "Upstream request failed");
                StatusCode::BAD_GATEWAY.into_response()
            }
        }
    }
}

/// Convert an upstream response into a downstream one without buffering.
fn relay(upstream: reqwest::Response) -> Response {
    let status = upstream.status();
    let mut headers = upstream.headers().clone();
    strip_hop_by_hop(&mut headers);

    let mut response = Response::new(Body::from_stream(upstream.bytes_stream()));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    response
}
