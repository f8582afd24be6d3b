// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Proactive cache refresh
//!
//! Repopulates every directory location on a fixed cadence, independent of
//! inbound traffic, so requests rarely pay for an upstream fetch.

mod cleanup;
mod location_task;

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::scrape::Scraper;

pub use cleanup::start_cache_cleanup_task;

/// Starts the background refresh loop
///
/// The first cycle runs immediately, then one per `period`. The loop stops
/// when `shutdown_rx` flips to `true` or its sender is dropped; the returned handle resolves once the
/// cycle in progress has finished. A failure or panic while refreshing one
/// location is logged and never stops the loop.
pub fn start_refresh_loop(
    mut shutdown_rx: watch::Receiver<bool>,
    scraper: Arc<Scraper>,
    period: Duration,
) -> JoinHandle<()> {
    tracing::info!(
        "Starting background refresh loop every {}s",
        period.as_secs()
    );

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {},
                changed = shutdown_rx.changed() => {
                    // A dropped sender can never signal again
                    if changed.is_err() || *shutdown_rx.borrow() {
                        tracing::info!("Stopping refresh loop");
                        break;
                    }
                    continue;
                }
            }

            refresh_cycle(&scraper).await;
        }
    })
}

async fn refresh_cycle(scraper: &Arc<Scraper>) {
    let cycle_start = std::time::Instant::now();
    let directory = scraper.directory().await;

    let tasks: Vec<_> = directory
        .locations()
        .iter()
        .map(|location| {
            let name = location.name.clone();
            let task = location_task::spawn_location_refresh(scraper.clone(), location.clone());
            (name, task)
        })
        .collect();

    // Wait for all refresh tasks to complete
    for (name, task) in tasks {
        if let Err(e) = task.await {
            tracing::error!("Refresh task for {} aborted: {}", name, e);
        }
    }

    let elapsed = cycle_start.elapsed().as_secs_f64();
    scraper.metrics().record_refresh_cycle_duration(elapsed);
    tracing::debug!(
        "Refresh cycle for {} location(s) completed in {:.3}s",
        directory.len(),
        elapsed
    );
}
