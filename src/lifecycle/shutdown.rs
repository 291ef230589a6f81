//! Shutdown coordination for the gateway.
//!
//! Firing the signal makes the server stop accepting connections on the
//! Unix socket. Requests already being proxied keep streaming until the
//! upstream finishes, then the server returns. The socket file stays on
//! disk; the next start removes it before binding.

use tokio::sync::broadcast;

/// One-shot stop signal shared by the server and the signal watcher.
///
/// `main` and each test gateway own one. Dropping it closes the channel,
/// which the server treats the same as a trigger, so it must outlive the
/// serving task.
#[derive(Debug)]
pub struct Shutdown {
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// A receiver to hand to [`GatewayServer::run`](crate::GatewayServer::run).
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Stop accepting and start draining. Safe to call with no receivers.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Number of servers still waiting on the signal.
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}
