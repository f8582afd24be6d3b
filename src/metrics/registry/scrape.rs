// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Scrape and registry-level bookkeeping helpers

use crate::error::{AppError, Result};
use crate::metrics::labels::LocationLabels;
use prometheus_client::encoding::text::encode;

use super::MetricsRegistry;

impl MetricsRegistry {
    pub async fn encode_metrics(&self) -> Result<String> {
        let registry = self.registry.lock().await;
        let mut buffer = String::new();
        encode(&mut buffer, &registry).map_err(|e| AppError::Metrics(e.to_string()))?;
        Ok(buffer)
    }

    pub fn record_scrape_success(&self, labels: &LocationLabels, machine_count: usize) {
        self.scrape_success.get_or_create(labels).inc();
        #[allow(clippy::cast_possible_wrap)]
        self.machines
            .get_or_create(labels)
            .set(machine_count as i64);
        // Record timestamp of successful scrape
        let now = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();
        #[allow(clippy::cast_possible_wrap)]
        self.scrape_last_success_timestamp_seconds
            .get_or_create(labels)
            .set(now as i64);
    }

    pub fn record_scrape_error(&self, labels: &LocationLabels) {
        self.scrape_errors.get_or_create(labels).inc();
    }

    pub fn record_cache_hit(&self, labels: &LocationLabels) {
        self.cache_hits.get_or_create(labels).inc();
    }

    pub fn record_cache_miss(&self, labels: &LocationLabels) {
        self.cache_misses.get_or_create(labels).inc();
    }

    /// Initialize metrics for a location to zero
    ///
    /// Counters exist from the start so Prometheus can compute rates before
    /// the first success or error.
    pub fn initialize_location_metrics(&self, labels: &LocationLabels) {
        let _ = self.scrape_success.get_or_create(labels);
        let _ = self.scrape_errors.get_or_create(labels);
        let _ = self.cache_hits.get_or_create(labels);
        let _ = self.cache_misses.get_or_create(labels);
    }

    pub fn record_scrape_duration(&self, labels: &LocationLabels, duration_secs: f64) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let millis = (duration_secs * 1000.0).round() as i64;
        self.scrape_duration_milliseconds
            .get_or_create(labels)
            .set(millis);
    }

    pub fn record_refresh_cycle_duration(&self, duration_secs: f64) {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        let millis = (duration_secs * 1000.0).round() as i64;
        self.refresh_cycle_duration_milliseconds.set(millis);
    }

    pub fn update_directory_size(&self, locations: usize) {
        #[allow(clippy::cast_possible_wrap)]
        self.directory_locations.set(locations as i64);
    }

    /// Get scrape success count for health check
    pub async fn get_scrape_success_count(&self, labels: &LocationLabels) -> u64 {
        self.scrape_success.get_or_create(labels).get()
    }

    /// Get scrape error count for health check
    pub async fn get_scrape_error_count(&self, labels: &LocationLabels) -> u64 {
        self.scrape_errors.get_or_create(labels).get()
    }
}
