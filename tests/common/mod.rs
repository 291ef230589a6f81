//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Body;
use axum::extract::State;
use axum::response::{IntoResponse, Response};
use axum::Router;
use guest_gateway::net::bind_socket;
use guest_gateway::{Credential, GatewayConfig, GatewayServer, Shutdown};
use http_body_util::{BodyExt, Full};
use hyper::body::Bytes;
use hyper::header::{CONTENT_TYPE, HOST, LOCATION};
use hyper::{HeaderMap, Method, Request, StatusCode};
use hyper_util::rt::TokioIo;
use tempfile::TempDir;
use tokio::net::{TcpListener, UnixStream};

pub const RATE_LIMIT_BODY: &str =
    r#"{"error":{"message":"Rate limit reached for requests","type":"requests","code":"rate_limit_exceeded"}}"#;

/// A request as seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path_and_query: String,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// An in-process stand-in for the upstream API.
pub struct MockUpstream {
    pub addr: SocketAddr,
    pub captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

impl MockUpstream {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }

    pub fn count_path(&self, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.path_and_query == path)
            .count()
    }
}

/// Start a mock upstream on an ephemeral port.
///
/// Special paths:
/// - `/v1/slow` never answers within a test's lifetime
/// - `/v1/rate-limited` answers 429 with a JSON error body
/// - `/v1/redirect` answers 307 pointing elsewhere
///
/// Everything else answers 200 with the received body length.
pub async fn start_mock_upstream() -> MockUpstream {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let captured = Arc::new(Mutex::new(Vec::new()));

    let app = Router::new()
        .fallback(record_and_answer)
        .with_state(captured.clone());

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    MockUpstream { addr, captured }
}

async fn record_and_answer(
    State(captured): State<Arc<Mutex<Vec<CapturedRequest>>>>,
    request: axum::http::Request<Body>,
) -> Response {
    let (parts, body) = request.into_parts();
    let body = axum::body::to_bytes(body, usize::MAX).await.unwrap_or_default();
    let path_and_query = parts
        .uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_default();

    captured.lock().unwrap().push(CapturedRequest {
        method: parts.method.clone(),
        path_and_query: path_and_query.clone(),
        headers: parts.headers.clone(),
        body: body.clone(),
    });

    match parts.uri.path() {
        "/v1/slow" => {
            tokio::time::sleep(Duration::from_secs(120)).await;
            (StatusCode::OK, "late").into_response()
        }
        "/v1/rate-limited" => Response::builder()
            .status(StatusCode::TOO_MANY_REQUESTS)
            .header(CONTENT_TYPE, "application/json")
            .header("x-ratelimit-remaining-requests", "0")
            .body(Body::from(RATE_LIMIT_BODY))
            .unwrap(),
        "/v1/redirect" => Response::builder()
            .status(StatusCode::TEMPORARY_REDIRECT)
            .header(LOCATION, "/v1/elsewhere")
            .body(Body::empty())
            .unwrap(),
        _ => Response::builder()
            .status(StatusCode::OK)
            .header(CONTENT_TYPE, "application/json")
            .header("x-upstream", "mock")
            .body(Body::from(format!(r#"{{"received":{}}}"#, body.len())))
            .unwrap(),
    }
}

/// A gateway serving on a socket inside its own temp directory.
pub struct RunningGateway {
    pub socket_path: PathBuf,
    shutdown: Shutdown,
    _dir: TempDir,
}

impl Drop for RunningGateway {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Bind and run a gateway that forwards to `base_url`.
pub async fn start_gateway(base_url: &str, credential: Credential) -> RunningGateway {
    let dir = tempfile::tempdir().unwrap();
    let socket_path = dir.path().join("gateway.sock");

    let mut config = GatewayConfig::default();
    config.listener.socket_path = socket_path.clone();
    config.upstream.base_url = base_url.to_string();
    config.upstream.use_env_proxy = false;

    let listener = bind_socket(&socket_path).unwrap();
    let server = GatewayServer::new(config, credential).unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    RunningGateway {
        socket_path,
        shutdown,
        _dir: dir,
    }
}

/// A response read fully off the socket.
#[derive(Debug)]
pub struct SocketResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// Send one HTTP/1.1 request over the Unix socket and read the whole reply.
pub async fn send(socket: &Path, request: Request<Full<Bytes>>) -> SocketResponse {
    let stream = UnixStream::connect(socket).await.unwrap();
    let (mut sender, conn) = hyper::client::conn::http1::handshake(TokioIo::new(stream))
        .await
        .unwrap();
    tokio::spawn(async move {
        let _ = conn.await;
    });

    let response = sender.send_request(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let body = body.collect().await.unwrap().to_bytes();

    SocketResponse {
        status: parts.status,
        headers: parts.headers,
        body,
    }
}

pub fn get(path: &str) -> Request<Full<Bytes>> {
    Request::builder()
        .method(Method::GET)
        .uri(path)
        .header(HOST, "localhost")
        .body(Full::new(Bytes::new()))
        .unwrap()
}

pub fn post(path: &str, body: impl Into<Bytes>) -> Request<Full<Bytes>> {
    Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(HOST, "localhost")
        .body(Full::new(body.into()))
        .unwrap()
}

/// Poll `condition` until it holds or five seconds pass.
pub async fn wait_for(mut condition: impl FnMut() -> bool) {
    let deadline = tokio::time::Instant::now() + Duration::from_secs(5);
    while !condition() {
        assert!(
            tokio::time::Instant::now() < deadline,
            "condition not met within 5s"
        );
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
}
