//! Product Catalog - CRUD product service with a cache-aside read path

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use product_catalog::api::create_router;
use product_catalog::cache::{CacheBackend, MemoryCache, RedisCache};
use product_catalog::config::CacheBackendKind;
use product_catalog::store::MemoryProductStore;
use product_catalog::{spawn_cleanup_task, AppState, Config};

/// Main entry point for the catalog server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect the cache backend (starting the sweep task for the in-memory one)
/// 4. Create Axum router with all endpoints
/// 5. Serve until SIGINT/SIGTERM, then shut down gracefully
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "product_catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Product Catalog Server");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, cache={:?}, product_ttl={}s, product_list_ttl={}s",
        config.server_port, config.cache_backend, config.product_ttl, config.product_list_ttl
    );

    let (cache, cleanup_handle): (Arc<dyn CacheBackend>, Option<JoinHandle<()>>) =
        match config.cache_backend {
            CacheBackendKind::Memory => {
                let cache = MemoryCache::new();
                let handle = spawn_cleanup_task(cache.clone(), config.cleanup_interval);
                let cache: Arc<dyn CacheBackend> = Arc::new(cache);
                (cache, Some(handle))
            }
            CacheBackendKind::Redis => {
                let cache = RedisCache::connect(&config.redis_url)
                    .await
                    .with_context(|| format!("connecting to Redis at {}", config.redis_url))?;
                let cache: Arc<dyn CacheBackend> = Arc::new(cache);
                (cache, None)
            }
        };
    info!("Cache backend initialized: {}", cache.name());

    let state = AppState::with_backends(Arc::new(MemoryProductStore::new()), cache, &config);
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then stops the cleanup task.
async fn shutdown_signal(cleanup_handle: Option<JoinHandle<()>>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
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

    if let Some(handle) = cleanup_handle {
        handle.abort();
        warn!("Cleanup task aborted");
    }
}
