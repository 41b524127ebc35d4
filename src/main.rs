//! Edu Video Cache - a cache-backed educational video search service
//!
//! Memoizes expensive, rate-limited remote video search calls in bounded,
//! time-expiring in-memory caches.

mod api;
mod cache;
mod config;
mod error;
mod models;
mod tasks;
mod youtube;

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::signal;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use cache::CacheManager;
use config::Config;
use tasks::spawn_cleanup_task;
use youtube::{YouTubeClient, YouTubeService};

/// Main entry point for the video cache server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the two cache tiers with configured policies
/// 4. Build the YouTube provider and the cache-backed service
/// 5. Optionally start the background expired-entry sweep
/// 6. Create Axum router with all endpoints
/// 7. Start HTTP server on configured port
/// 8. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "edu_video_cache=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Edu Video Cache Server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: port={}, search_cache={}x{}s, video_cache={}x{}s",
        config.server_port,
        config.search_cache_max_entries,
        config.search_cache_ttl,
        config.video_cache_max_entries,
        config.video_cache_ttl,
    );

    if config.youtube_api_key.is_empty() {
        warn!("YOUTUBE_API_KEY is not set; remote searches will fail");
    }

    // Create cache tiers once and share them by reference from here on
    let search_cache = Arc::new(RwLock::new(CacheManager::new(config.search_cache_config())));
    let video_cache = Arc::new(RwLock::new(CacheManager::new(config.video_cache_config())));

    // Wire the provider and caches into the service
    let provider = Arc::new(YouTubeClient::new(config.youtube_api_key.clone()));
    let service = YouTubeService::new(provider, search_cache.clone(), video_cache.clone());
    let state = AppState::new(service);
    info!("Video search service initialized");

    // Expiration is lazy; the periodic sweep is opt-in
    let mut task_handles: Vec<JoinHandle<()>> = Vec::new();
    if config.cleanup_interval > 0 {
        task_handles.push(spawn_cleanup_task(
            search_cache,
            config.cleanup_interval,
            "search",
        ));
        task_handles.push(spawn_cleanup_task(
            video_cache,
            config.cleanup_interval,
            "videos",
        ));
        info!("Background sweep tasks started");
    }

    // Create router with all endpoints
    let app = create_router(state);

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(task_handles))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the background tasks and allows graceful shutdown.
async fn shutdown_signal(task_handles: Vec<JoinHandle<()>>) {
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

    // Abort the background sweep tasks
    for handle in task_handles {
        handle.abort();
    }
}
