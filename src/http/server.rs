//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router for the proxy prefix
//! - Wire up access logging (tower-http trace layer)
//! - Serve on the bound Unix socket listener
//! - Hand proxy-eligible requests to the rewrite/forward path
//!
//! Requests outside the prefix get a plain 404 and never reach the
//! upstream, so they never carry the credential.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use tokio::net::UnixListener;
use tokio::sync::broadcast;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::GatewayConfig;
use crate::error::Result;
use crate::proxy::{Credential, Forwarder, UpstreamTarget};
use crate::security::has_dot_segment;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub target: Arc<UpstreamTarget>,
    pub credential: Arc<Credential>,
    pub forwarder: Forwarder,
}

/// HTTP server for the gateway.
pub struct GatewayServer {
    router: Router,
    config: GatewayConfig,
}

impl GatewayServer {
    /// Create a new server that forwards with the given credential.
    pub fn new(config: GatewayConfig, credential: Credential) -> Result<Self> {
        let target = Arc::new(UpstreamTarget::from_config(&config.upstream)?);
        let forwarder = Forwarder::new(&config.upstream)?;

        tracing::info!(
            upstream = %config.upstream.base_url,
            prefix = %config.upstream.prefix,
            base_path = %config.upstream.base_path,
            credential_present = !credential.is_empty(),
            "Proxy configured"
        );

        let state = AppState {
            target,
            credential: Arc::new(credential),
            forwarder,
        };

        let router = Self::build_router(state);
        Ok(Self { router, config })
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        let prefix = state.target.prefix().to_string();

        Router::new()
            .route(&prefix, any(proxy_handler))
            .route(&format!("{prefix}/"), any(proxy_handler))
            .route(&format!("{prefix}/{{*rest}}"), any(proxy_handler))
            .fallback(not_found)
            .with_state(state)
            .layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                    .on_response(DefaultOnResponse::new().level(Level::INFO)),
            )
    }

    /// A clone of the router, for driving the server without a socket.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server on `listener` until `shutdown` fires.
    ///
    /// Each accepted connection is served on its own task, so a request
    /// stalled on the upstream never holds up the accept loop.
    pub async fn run(
        self,
        listener: UnixListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> std::io::Result<()> {
        tracing::info!(
            socket = %self.config.listener.socket_path.display(),
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Rewrite a proxy-eligible request and forward it upstream.
///
/// Paths with `.` or `..` segments are answered 404 without forwarding.
async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    if has_dot_segment(request.uri().path()) {
        tracing::warn!(path = %request.uri().path(), "Rejected path with dot segment");
        return not_found().await.into_response();
    }

    let (parts, body) = request.into_parts();
    let outbound = state.target.rewrite(parts, &state.credential);
    state.forwarder.forward(outbound, body).await
}

async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "Not Found")
}
