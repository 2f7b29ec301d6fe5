//! Readthru - a read-through byte cache server
//!
//! Serves cached bytes from an object store when a fresh copy exists, falls
//! back to the configured upstream origin on a miss, and writes the result
//! back best-effort.

mod api;
mod cache;
mod config;
mod error;
mod models;
mod origin;
mod store;
mod tasks;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use store::{FsStore, MemoryStore};
use tasks::spawn_sweeper_task;

/// Main entry point for the readthru cache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Select the store backend (filesystem if CACHE_DIR is set, else memory)
/// 4. Start the stale-object sweeper for the memory backend
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "readthru=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting readthru cache server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: bucket={}, freshness={}s, upstream={}, port={}",
        config.bucket, config.freshness_secs, config.upstream_url, config.server_port
    );

    // Select the store backend and, for the in-memory one, start the sweeper
    let (state, sweeper_handle) = match &config.cache_dir {
        Some(dir) => {
            info!("Using filesystem store at {}", dir.display());
            let store = Arc::new(FsStore::new(dir.clone()));
            (AppState::new(store, config.clone()), None)
        }
        None => {
            info!("Using in-memory store with stale-object sweeper");
            let store = Arc::new(MemoryStore::new());
            let handle = spawn_sweeper_task(
                Arc::clone(&store),
                config.sweep_interval,
                config.freshness(),
            );
            (AppState::new(store, config.clone()), Some(handle))
        }
    };

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(sweeper_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the sweeper task (if one is running) and
/// allows graceful shutdown.
async fn shutdown_signal(sweeper_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    if let Some(handle) = sweeper_handle {
        handle.abort();
        warn!("Sweeper task aborted");
    }
}
