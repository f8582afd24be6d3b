// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Per-location refresh task

use std::sync::Arc;

use crate::laundry::Location;
use crate::scrape::{ScrapeStatus, Scraper};

pub(super) fn spawn_location_refresh(
    scraper: Arc<Scraper>,
    location: Location,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tracing::trace!("Starting refresh for location: {}", location.name);
        let start = std::time::Instant::now();
        let report = scraper.refresh_location(&location).await;
        let duration = start.elapsed().as_secs_f64();

        match report.status {
            ScrapeStatus::Fresh => {
                tracing::debug!(
                    "Refreshed {} ({} machines) in {:.3}s",
                    location.name,
                    report.machines.len(),
                    duration
                );
            }
            ScrapeStatus::Stale => {
                tracing::warn!(
                    "Refresh of {} failed in {:.3}s, keeping {} cached machines",
                    location.name,
                    duration,
                    report.machines.len()
                );
            }
            ScrapeStatus::Unavailable => {
                tracing::warn!(
                    "Refresh of {} failed in {:.3}s, no cached data",
                    location.name,
                    duration
                );
            }
            ScrapeStatus::Cached => {
                tracing::trace!("Refresh of {} served from cache", location.name);
            }
        }
    })
}
