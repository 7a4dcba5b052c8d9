//! HTTP server initialization and runtime setup.
//!
//! Handles store selection, state wiring, and the Axum server lifecycle.

use crate::config::Config;
use crate::domain::repositories::EntryStore;
use crate::infrastructure::store::{FallbackStore, MemoryStore, RedisStore};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::signal;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Redis store with in-memory fallback (or in-memory only)
/// - Registry service
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if:
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = build_store(&config).await;
    let ttl = Duration::from_secs(config.short_link_ttl_seconds);

    let state = AppState::new(store, ttl);
    let app = app_router(state);

    let addr = config.listen_addr;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Selects the entry store for this process.
///
/// A configured Redis always becomes the primary tier over an in-memory
/// fallback. A failed startup PING is logged and tolerated: the store keeps
/// trying to connect on later operations. Without Redis configuration (or
/// with an unparseable URL) the service runs on the in-memory map alone.
pub async fn build_store(config: &Config) -> Arc<dyn EntryStore> {
    let Some(redis_url) = config.redis_url.as_deref() else {
        tracing::warn!("Durable store disabled; short links will not survive restarts");
        return Arc::new(MemoryStore::new());
    };

    let redis = match RedisStore::open(redis_url) {
        Ok(redis) => redis,
        Err(e) => {
            tracing::warn!("Invalid Redis configuration: {}. Using in-memory store.", e);
            return Arc::new(MemoryStore::new());
        }
    };

    match redis.ping().await {
        Ok(()) => tracing::info!("Store enabled (Redis with in-memory fallback)"),
        Err(e) => tracing::warn!(
            "Redis not reachable at startup: {}. Writes use the in-memory fallback until it recovers.",
            e
        ),
    }

    Arc::new(FallbackStore::new(redis, MemoryStore::new()))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
