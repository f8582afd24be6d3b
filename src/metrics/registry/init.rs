// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Registry initialization and metric registration

use crate::metrics::labels::LocationLabels;
use prometheus_client::metrics::counter::Counter;
use prometheus_client::metrics::family::Family;
use prometheus_client::metrics::gauge::Gauge;
use prometheus_client::registry::Registry;
use std::sync::Arc;
use tokio::sync::Mutex;

use super::MetricsRegistry;

impl MetricsRegistry {
    pub fn new() -> Self {
        let mut registry = Registry::default();

        let scrape_success = Family::<LocationLabels, Counter>::default();
        registry.register(
            "laundry_scrape_success",
            "Successful upstream scrapes per location",
            scrape_success.clone(),
        );
        let scrape_errors = Family::<LocationLabels, Counter>::default();
        registry.register(
            "laundry_scrape_errors",
            "Failed upstream scrapes per location",
            scrape_errors.clone(),
        );
        let scrape_duration_milliseconds = Family::<LocationLabels, Gauge>::default();
        registry.register(
            "laundry_scrape_duration_milliseconds",
            "Duration of last upstream scrape in milliseconds",
            scrape_duration_milliseconds.clone(),
        );
        let scrape_last_success_timestamp_seconds = Family::<LocationLabels, Gauge>::default();
        registry.register(
            "laundry_scrape_last_success_timestamp_seconds",
            "Unix timestamp of last successful scrape",
            scrape_last_success_timestamp_seconds.clone(),
        );
        let cache_hits = Family::<LocationLabels, Counter>::default();
        registry.register(
            "laundry_cache_hits",
            "Requests answered from the cache",
            cache_hits.clone(),
        );
        let cache_misses = Family::<LocationLabels, Counter>::default();
        registry.register(
            "laundry_cache_misses",
            "Requests that required an upstream fetch",
            cache_misses.clone(),
        );
        let machines = Family::<LocationLabels, Gauge>::default();
        registry.register(
            "laundry_machines",
            "Machines reported by the last successful scrape",
            machines.clone(),
        );
        let refresh_cycle_duration_milliseconds = Gauge::default();
        registry.register(
            "laundry_refresh_cycle_duration_milliseconds",
            "Duration of the last full refresh cycle in milliseconds",
            refresh_cycle_duration_milliseconds.clone(),
        );
        let directory_locations = Gauge::default();
        registry.register(
            "laundry_directory_locations",
            "Locations currently in the directory",
            directory_locations.clone(),
        );

        Self {
            registry: Arc::new(Mutex::new(registry)),
            scrape_success,
            scrape_errors,
            scrape_duration_milliseconds,
            scrape_last_success_timestamp_seconds,
            cache_hits,
            cache_misses,
            machines,
            refresh_cycle_duration_milliseconds,
            directory_locations,
        }
    }
}
