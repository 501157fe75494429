//! HTTP server setup: tracing, listener, eviction sweeps, shutdown.

use crate::api;
use crate::config::ServerConfig;
use crate::registry::GameRegistry;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter.
pub fn init_tracing(config: &ServerConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .init();
}

/// Serves the API on `listener` until `shutdown` resolves.
pub async fn serve_on(
    listener: TcpListener,
    registry: Arc<GameRegistry>,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let app = api::router(registry);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// Spawns a task that evicts games idle longer than `ttl` every `interval`.
#[instrument(skip(registry))]
pub fn spawn_eviction(
    registry: Arc<GameRegistry>,
    ttl: Duration,
    interval: Duration,
) -> JoinHandle<()> {
    info!("Starting idle game eviction");
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            let evicted = registry.evict_idle(ttl);
            debug!(evicted, remaining = registry.len(), "Eviction sweep finished");
        }
    })
}

/// Runs the server described by `config` until Ctrl+C.
#[instrument(skip(config), fields(addr = %config.bind_addr()))]
pub async fn run(config: ServerConfig) -> anyhow::Result<()> {
    let registry = Arc::new(GameRegistry::new());

    let sweeper = config
        .idle_ttl()
        .map(|ttl| spawn_eviction(Arc::clone(&registry), ttl, config.sweep_interval()));

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!(addr = %listener.local_addr()?, "Server ready");

    serve_on(listener, Arc::clone(&registry), shutdown_signal()).await?;

    if let Some(sweeper) = sweeper {
        sweeper.abort();
    }
    info!(games = registry.len(), "Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for Ctrl+C; shutting down");
    }
    info!("Shutdown signal received");
}
