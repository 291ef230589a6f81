use clap::Parser;

use guest_gateway::cli::Cli;
use guest_gateway::lifecycle::{wait_for_signal, Shutdown};
use guest_gateway::{net, observability, Credential, GatewayServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Cli::parse().into_config()?;

    observability::init(&config.observability);

    tracing::info!("guest-gateway v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        socket = %config.listener.socket_path.display(),
        upstream = %config.upstream.base_url,
        "Configuration loaded"
    );

    let credential = Credential::from_env(&config.upstream.credential_env);

    let listener = match net::bind_socket(&config.listener.socket_path) {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(error = %e, "Cannot start without a listener");
            return Err(e.into());
        }
    };

    let server = GatewayServer::new(config, credential)?;

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        wait_for_signal().await;
        shutdown.trigger();
    });

    server.run(listener, server_shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
