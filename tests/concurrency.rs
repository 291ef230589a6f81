//! Concurrent requests through a single gateway.

use std::time::{Duration, Instant};

use futures_util::future::join_all;
use guest_gateway::Credential;
use hyper::StatusCode;

mod common;
use common::{get, send, start_gateway, start_mock_upstream, wait_for};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_fifty_simultaneous_requests_complete() {
    let upstream = start_mock_upstream().await;
    let gateway = start_gateway(&upstream.base_url(), Credential::new("sk-test")).await;

    let responses = join_all((0..50).map(|_| send(&gateway.socket_path, get("/openai/models")))).await;

    assert!(responses.iter().all(|r| r.status == StatusCode::OK));
    assert_eq!(upstream.count_path("/v1/models"), 50);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_hanging_upstream_call_does_not_block_others() {
    let upstream = start_mock_upstream().await;
    let gateway = start_gateway(&upstream.base_url(), Credential::new("sk-test")).await;

    let slow_socket = gateway.socket_path.clone();
    let slow = tokio::spawn(async move { send(&slow_socket, get("/openai/slow")).await });
    wait_for(|| upstream.count_path("/v1/slow") == 1).await;

    let started = Instant::now();
    let responses = tokio::time::timeout(
        Duration::from_secs(10),
        join_all((0..50).map(|_| send(&gateway.socket_path, get("/openai/models")))),
    )
    .await
    .expect("requests queued behind the hanging one");

    assert!(responses.iter().all(|r| r.status == StatusCode::OK));
    assert!(started.elapsed() < Duration::from_secs(10));
    assert!(!slow.is_finished());

    slow.abort();
}
