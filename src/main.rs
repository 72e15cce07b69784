//! redlet - A Minimal Redis-Compatible Key-Value Server
//!
//! This is the main entry point for the redlet server.
//! It parses the startup flags, sets up the TCP listener and keyspace, and
//! spawns a handler task per incoming connection.

use redlet::commands::CommandHandler;
use redlet::config::ServerConfig;
use redlet::connection::{handle_connection, ConnectionStats};
use redlet::storage::Keyspace;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse command-line arguments
    let config = Arc::new(ServerConfig::from_args());

    // Set up logging
    let _subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    info!("redlet v{} starting", redlet::VERSION);

    // Create the keyspace (shared across all connections)
    let keyspace = Arc::new(Keyspace::new());
    info!("Keyspace initialized");

    // Create connection statistics
    let stats = Arc::new(ConnectionStats::new());

    // Bind the TCP listener; failure here is the only startup-fatal error.
    let listener = TcpListener::bind(config.bind_address()).await?;
    info!("Listening on {}", config.bind_address());

    // Set up graceful shutdown
    let shutdown = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
        info!("Shutdown signal received, stopping server...");
    };

    // Main accept loop
    tokio::select! {
        _ = accept_loop(listener, keyspace, config, stats) => {}
        _ = shutdown => {}
    }

    info!("Server shutdown complete");
    Ok(())
}

/// Main loop that accepts incoming connections.
///
/// Connections are unbounded: every accepted client gets its own spawned
/// task sharing the keyspace and the read-only config.
async fn accept_loop(
    listener: TcpListener,
    keyspace: Arc<Keyspace>,
    config: Arc<ServerConfig>,
    stats: Arc<ConnectionStats>,
) {
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let handler = CommandHandler::new(Arc::clone(&keyspace), Arc::clone(&config));
                let stats = Arc::clone(&stats);

                tokio::spawn(async move {
                    handle_connection(stream, addr, handler, stats).await;
                });
            }
            Err(e) => {
                error!("Failed to accept connection: {}", e);
            }
        }
    }
}
