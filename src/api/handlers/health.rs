use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::AppState;
use crate::metrics::LocationLabels;

/// Health check endpoint response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub locations: Vec<LocationHealth>,
}

/// Scrape health of one location
#[derive(Debug, Serialize, Deserialize)]
pub struct LocationHealth {
    pub name: String,
    pub status: String,
    pub has_successful_scrape: bool,
}

/// GET /health
///
/// A location is "healthy" once any scrape succeeded, "degraded" when it has
/// only failures and "unknown" before its first scrape. Any degraded location
/// makes the service degraded (503).
pub async fn health_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let directory = state.scraper.directory().await;

    let mut locations = Vec::with_capacity(directory.len());
    for location in directory.locations() {
        let labels = LocationLabels::new(location.name.clone());
        let successes = state.metrics.get_scrape_success_count(&labels).await;
        let errors = state.metrics.get_scrape_error_count(&labels).await;

        let status = match (successes, errors) {
            (0, 0) => "unknown",
            (0, _) => "degraded",
            _ => "healthy",
        };
        locations.push(LocationHealth {
            name: location.name.clone(),
            status: status.to_string(),
            has_successful_scrape: successes > 0,
        });
    }

    let degraded = locations.iter().any(|l| l.status == "degraded");
    let response = HealthResponse {
        status: if degraded { "degraded" } else { "healthy" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        locations,
    };
    let code = if degraded {
        StatusCode::SERVICE_UNAVAILABLE
    } else {
        StatusCode::OK
    };

    (code, Json(response))
}
