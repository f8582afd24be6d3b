// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

use std::net::SocketAddr;
use std::sync::Arc;

use laundry_status::{
    AppState, Config, Directory, HttpFetcher, MemoryStore, MetricsRegistry, Result, Scraper,
    create_router, start_cache_cleanup_task, start_refresh_loop,
};
use tokio::sync::watch;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    setup_tracing();

    let config = Config::from_env();
    config.validate()?;

    tracing::info!(
        "Upstream {} (cache TTL {}s, refresh every {}s, fetch timeout {}ms)",
        config.upstream_url,
        config.cache_ttl_secs,
        config.refresh_interval_secs,
        config.fetch_timeout_ms
    );

    let metrics = MetricsRegistry::new();
    let store = MemoryStore::new();
    let fetcher = Arc::new(HttpFetcher::new(config.fetch_timeout())?);

    let scraper = match config.static_locations() {
        Some(locations) => {
            tracing::info!("Loaded {} static location(s)", locations.len());
            for location in &locations {
                tracing::info!("  - '{}' ({})", location.name, location.id);
            }
            Scraper::new(
                Directory::new(config.upstream_url.clone(), locations),
                Arc::new(store.clone()),
                fetcher,
                metrics.clone(),
                config.cache_ttl(),
            )
        }
        None => Scraper::with_discovery(
            config.upstream_url.clone(),
            Arc::new(store.clone()),
            fetcher,
            metrics.clone(),
            config.cache_ttl(),
        ),
    };
    let scraper = Arc::new(scraper);

    let state = Arc::new(AppState {
        config: config.clone(),
        metrics,
        scraper: scraper.clone(),
    });

    // Graceful shutdown channel
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    tokio::spawn({
        let shutdown_tx = shutdown_tx.clone();
        async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Shutdown signal received");
                let _ = shutdown_tx.send(true);
            }
        }
    });

    let refresh_handle = start_refresh_loop(
        shutdown_rx.clone(),
        scraper,
        config.refresh_interval(),
    );
    let cleanup_handle = start_cache_cleanup_task(store, shutdown_rx.clone());

    let app = create_router(state);

    let addr: SocketAddr = config.server_addr.parse().map_err(|e| {
        tracing::error!("Invalid server address: {}", e);
        e
    })?;

    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("Failed to bind address: {}", e);
        e
    })?;

    tracing::info!("Laundry status service starting on {}", addr);
    tracing::info!("Endpoints:");
    tracing::info!("  - GET /Laundry/location/all - Machines at every location");
    tracing::info!("  - GET /Laundry/status       - Possible machine statuses");
    tracing::info!("  - GET /Laundry/locations    - Known locations");
    tracing::info!("  - GET /Laundry/v2/demo      - Generated demo machines");
    tracing::info!("  - GET /Laundry/{{location}}   - Machines at one location");
    tracing::info!("  - GET /health               - Health check");
    tracing::info!("  - GET /metrics              - Prometheus metrics");

    let mut server_shutdown = shutdown_rx.clone();
    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            let _ = server_shutdown.changed().await;
            tracing::info!("HTTP server shutting down");
        })
        .await
        .map_err(|e| {
            tracing::error!("Server error: {}", e);
            e
        })?;

    // Let background tasks observe the signal even if the server stopped on its own
    let _ = shutdown_tx.send(true);
    let _ = refresh_handle.await;
    let _ = cleanup_handle.await;

    Ok(())
}

fn setup_tracing() {
    // RUST_LOG wins; default to "info"
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
