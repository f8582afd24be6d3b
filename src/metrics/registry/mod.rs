// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Metrics registry for scrape and cache telemetry

mod init;
mod scrape;

use crate::metrics::labels::LocationLabels;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct MetricsRegistry {
    registry: Arc<Mutex<Registry>>,
    // scrape status counters
    scrape_success: Family<LocationLabels, Counter>,
    scrape_errors: Family<LocationLabels, Counter>,
    // scrape timing metrics
    scrape_duration_milliseconds: Family<LocationLabels, Gauge>,
    scrape_last_success_timestamp_seconds: Family<LocationLabels, Gauge>,
    // cache effectiveness
    cache_hits: Family<LocationLabels, Counter>,
    cache_misses: Family<LocationLabels, Counter>,
    // last good scrape
    machines: Family<LocationLabels, Gauge>,
    refresh_cycle_duration_milliseconds: Gauge,
    directory_locations: Gauge,
}

impl Default for MetricsRegistry {
    fn default() -> Self {
        Self::new()
    }
}
