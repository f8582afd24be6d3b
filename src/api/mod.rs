// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! HTTP API module for the laundry status service
//!
//! # Endpoints
//! - `GET /Laundry/location/all` - machines at every location
//! - `GET /Laundry/status` - every status a machine can report
//! - `GET /Laundry/locations` - the location directory
//! - `GET /Laundry/v2/demo` - generated machines (`?comprehensive=true` for the fixed list)
//! - `GET /Laundry/{location}` - machines at one location
//! - `GET /health` - per-location scrape health
//! - `GET /metrics` - Prometheus metrics

pub mod handlers;

use axum::{Router, routing::get};
use std::sync::Arc;

use crate::config::Config;
use crate::metrics::MetricsRegistry;
use crate::scrape::Scraper;

/// Application state shared with endpoints
pub struct AppState {
    pub config: Config,
    pub metrics: MetricsRegistry,
    pub scraper: Arc<Scraper>,
}

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/Laundry/location/all", get(handlers::all_locations))
        .route("/Laundry/status", get(handlers::possible_statuses))
        .route("/Laundry/locations", get(handlers::list_locations))
        .route("/Laundry/v2/demo", get(handlers::demo_machines))
        .route("/Laundry/{location}", get(handlers::machines_at_location))
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .with_state(state)
}
