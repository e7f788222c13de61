//! Inventory Guard - response cache and rate limiter for an inventory admin API

use std::net::SocketAddr;

use anyhow::Context;
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use inventory_guard::{create_router, AppState, CleanupTasks, Config};

/// Main entry point for the Inventory Guard service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the cache and rate limiter
/// 4. Start the background cleanup tasks
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. On SIGINT/SIGTERM, stop the cleanup tasks and drain connections
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inventory_guard=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Inventory Guard");

    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, default_ttl={}s, search_ttl={}s, rate_limit={}/{}ms, cleanup={}s/{}s",
        config.server_port,
        config.default_ttl,
        config.search_ttl,
        config.rate_limit_max_requests,
        config.rate_limit_window_ms,
        config.cache_cleanup_interval,
        config.rate_limit_cleanup_interval
    );

    let state = AppState::from_config(&config);
    info!("Cache and rate limiter initialized");

    let cleanup_tasks = CleanupTasks::spawn(
        state.cache.clone(),
        config.cache_cleanup_period(),
        state.rate_limiter.clone(),
        config.rate_limit_cleanup_period(),
    );
    info!("Background cleanup tasks started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_tasks))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then stops the cleanup
/// tasks.
async fn shutdown_signal(cleanup_tasks: CleanupTasks) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", err);
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
                tracing::error!("Failed to install SIGTERM handler: {}", err);
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

    cleanup_tasks.shutdown();
}
