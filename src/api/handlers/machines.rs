// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Machine availability endpoints

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::AppState;
use crate::error::AppError;
use crate::laundry::{Machine, comprehensive_data, random_data};

/// Error body for client errors
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// GET /Laundry/location/all
pub async fn all_locations(State(state): State<Arc<AppState>>) -> Response {
    tracing::info!(location = "all", "GET machines");
    let reports = state.scraper.scrape_all().await;
    (StatusCode::OK, Json(reports)).into_response()
}

/// GET /Laundry/{location}
///
/// 404 for unknown locations; upstream trouble still answers 200 with the
/// best data available.
pub async fn machines_at_location(
    State(state): State<Arc<AppState>>,
    Path(location): Path<String>,
) -> Response {
    tracing::info!(location = %location, "GET machines");
    match state.scraper.scrape_location(&location).await {
        Ok(machines) => (StatusCode::OK, Json(machines)).into_response(),
        Err(AppError::LocationNotFound(name)) => {
            tracing::warn!("Unknown location requested: {}", name);
            (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: format!("Unknown location: {name}"),
                }),
            )
                .into_response()
        }
        Err(e) => {
            // Upstream failures are absorbed by the scraper; anything else is a bug
            tracing::error!("Unexpected error for {}: {}", location, e);
            (StatusCode::OK, Json(Vec::<Machine>::new())).into_response()
        }
    }
}

/// GET /Laundry/status
pub async fn possible_statuses(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let labels: Vec<&'static str> = state.scraper.statuses().iter().map(|s| s.label()).collect();
    (StatusCode::OK, Json(labels))
}

/// GET /Laundry/locations
pub async fn list_locations(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let directory = state.scraper.directory().await;
    (StatusCode::OK, Json(directory.locations().to_vec()))
}

#[derive(Debug, Default, Deserialize)]
pub struct DemoParams {
    /// Serve the fixed list instead of a random one
    #[serde(default)]
    pub comprehensive: bool,
}

/// GET /Laundry/v2/demo
///
/// Generated machines in the `/Laundry/{location}` shape; never hits upstream.
pub async fn demo_machines(Query(params): Query<DemoParams>) -> impl IntoResponse {
    let machines = if params.comprehensive {
        comprehensive_data()
    } else {
        random_data()
    };
    tracing::debug!(count = machines.len(), "GET demo machines");
    (StatusCode::OK, Json(machines))
}
