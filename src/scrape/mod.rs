// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Scrape orchestration
//!
//! [`Scraper`] is the single authority deciding whether a request is answered
//! from the cache or from the upstream page. Inbound requests and the refresh
//! loop both go through it.

mod report;


use futures_util::future::join_all;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

use crate::cache::CacheStore;
use crate::error::{AppError, Result};
use crate::laundry::{
    Directory, Fetcher, Location, Machine, MachineStatus, parse_locations, parse_machines,
};
use crate::metrics::{LocationLabels, MetricsRegistry};

pub use report::{LocationReport, ScrapeStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Serve from cache when possible
    Cached,
    /// Always go upstream
    Forced,
}

/// Cache-aside scraper with single-flight upstream fetches per location
pub struct Scraper {
    directory: RwLock<Arc<Directory>>,
    discover: bool,
    discovery_gate: Mutex<()>,
    store: Arc<dyn CacheStore>,
    fetcher: Arc<dyn Fetcher>,
    metrics: MetricsRegistry,
    ttl: Duration,
    gates: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl Scraper {
    /// Creates a scraper over a fixed directory
    pub fn new(
        directory: Directory,
        store: Arc<dyn CacheStore>,
        fetcher: Arc<dyn Fetcher>,
        metrics: MetricsRegistry,
        ttl: Duration,
    ) -> Self {
        metrics.update_directory_size(directory.len());
        for location in directory.locations() {
            metrics.initialize_location_metrics(&LocationLabels::new(location.name.clone()));
        }

        Self {
            directory: RwLock::new(Arc::new(directory)),
            discover: false,
            discovery_gate: Mutex::new(()),
            store,
            fetcher,
            metrics,
            ttl,
            gates: Mutex::new(HashMap::new()),
        }
    }

    /// Creates a scraper that discovers its directory from the upstream
    /// location picker on first use
    pub fn with_discovery(
        base_url: impl Into<String>,
        store: Arc<dyn CacheStore>,
        fetcher: Arc<dyn Fetcher>,
        metrics: MetricsRegistry,
        ttl: Duration,
    ) -> Self {
        let mut scraper = Self::new(Directory::empty(base_url), store, fetcher, metrics, ttl);
        scraper.discover = true;
        scraper
    }

    /// Current directory snapshot
    ///
    /// With discovery enabled an empty snapshot triggers a discovery attempt,
    /// so a cold start with the upstream down heals on a later call.
    pub async fn directory(&self) -> Arc<Directory> {
        let current = self.directory.read().await.clone();
        if !self.discover || !current.is_empty() {
            return current;
        }

        let _gate = self.discovery_gate.lock().await;
        let current = self.directory.read().await.clone();
        if !current.is_empty() {
            return current;
        }

        match self.fetcher.fetch(current.base_url()).await {
            Ok(html) => {
                let locations = parse_locations(&html);
                if locations.is_empty() {
                    tracing::warn!("Location discovery found no locations");
                    return current;
                }

                let discovered = Arc::new(Directory::new(current.base_url(), locations));
                tracing::info!("Discovered {} location(s)", discovered.len());
                self.metrics.update_directory_size(discovered.len());
                for location in discovered.locations() {
                    self.metrics
                        .initialize_location_metrics(&LocationLabels::new(location.name.clone()));
                }
                *self.directory.write().await = discovered.clone();
                discovered
            }
            Err(e) => {
                tracing::warn!("Location discovery failed: {}", e);
                current
            }
        }
    }

    #[must_use]
    pub fn metrics(&self) -> &MetricsRegistry {
        &self.metrics
    }

    /// The fixed list of statuses a machine can report
    #[must_use]
    pub fn statuses(&self) -> [MachineStatus; 7] {
        MachineStatus::ALL
    }

    /// Machines at a location, from cache when fresh enough
    ///
    /// # Errors
    ///
    /// Returns `AppError::LocationNotFound` for names not in the directory.
    /// Upstream failures are never errors: they yield the last known machines
    /// or an empty list.
    pub async fn scrape_location(&self, name: &str) -> Result<Vec<Machine>> {
        Ok(self.report_location(name).await?.machines)
    }

    /// Like [`Scraper::scrape_location`] but keeps the freshness tag
    ///
    /// # Errors
    ///
    /// Returns `AppError::LocationNotFound` for names not in the directory.
    pub async fn report_location(&self, name: &str) -> Result<LocationReport> {
        let directory = self.directory().await;
        let location = directory
            .lookup(name)
            .ok_or_else(|| AppError::LocationNotFound(name.to_string()))?;
        let url = directory.url_for(location);
        Ok(self.scrape(location, &url, Mode::Cached).await)
    }

    /// Every directory location, scraped concurrently, in directory order
    pub async fn scrape_all(&self) -> Vec<LocationReport> {
        let directory = self.directory().await;
        let scrapes = directory.locations().iter().map(|location| {
            let url = directory.url_for(location);
            async move { self.scrape(location, &url, Mode::Cached).await }
        });
        join_all(scrapes).await
    }

    /// Fetches a location upstream regardless of the cache
    pub async fn refresh_location(&self, location: &Location) -> LocationReport {
        let url = self.directory().await.url_for(location);
        self.scrape(location, &url, Mode::Forced).await
    }

    async fn scrape(&self, location: &Location, url: &str, mode: Mode) -> LocationReport {
        let key = location.name.as_str();
        let labels = LocationLabels::new(key);

        if mode == Mode::Cached {
            if let Some(machines) = self.cached(key).await {
                tracing::trace!("Cache hit for {}", key);
                self.metrics.record_cache_hit(&labels);
                return LocationReport::new(key, ScrapeStatus::Cached, machines);
            }
        }

        let gate = self.gate(key).await;
        let _in_flight = gate.lock().await;

        // A concurrent caller may have filled the cache while we waited
        if mode == Mode::Cached {
            if let Some(machines) = self.cached(key).await {
                tracing::trace!("Cache filled while waiting for {}", key);
                self.metrics.record_cache_hit(&labels);
                return LocationReport::new(key, ScrapeStatus::Cached, machines);
            }
            self.metrics.record_cache_miss(&labels);
        }

        let start = Instant::now();
        let fetched = self.fetcher.fetch(url).await;
        self.metrics
            .record_scrape_duration(&labels, start.elapsed().as_secs_f64());

        match fetched {
            Ok(html) => {
                let machines = parse_machines(&html);
                if machines.is_empty() {
                    tracing::warn!("No machines parsed for {} ({} bytes of HTML)", key, html.len());
                }
                self.store_machines(key, &machines).await;
                self.metrics.record_scrape_success(&labels, machines.len());
                tracing::debug!(
                    "Scraped {} machine(s) for {} in {:.3}s",
                    machines.len(),
                    key,
                    start.elapsed().as_secs_f64()
                );
                LocationReport::new(key, ScrapeStatus::Fresh, machines)
            }
            Err(e) => {
                self.metrics.record_scrape_error(&labels);
                tracing::warn!("Failed to fetch {} from {}: {}", key, url, e);
                match self.cached(key).await {
                    Some(machines) => LocationReport::new(key, ScrapeStatus::Stale, machines),
                    None => LocationReport::new(key, ScrapeStatus::Unavailable, Vec::new()),
                }
            }
        }
    }

    async fn cached(&self, key: &str) -> Option<Vec<Machine>> {
        match self.store.exists(key).await {
            Ok(true) => {}
            Ok(false) => return None,
            Err(e) => {
                tracing::warn!("Cache lookup for {} failed: {}", key, e);
                return None;
            }
        }

        // The entry can expire between `exists` and `get`; that is a miss
        let raw = match self.store.get(key).await {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!("Cache read for {} failed: {}", key, e);
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(machines) => Some(machines),
            Err(e) => {
                tracing::warn!("Discarding unreadable cache entry for {}: {}", key, e);
                None
            }
        }
    }

    async fn store_machines(&self, key: &str, machines: &[Machine]) {
        let stored = match serde_json::to_string(machines) {
            Ok(json) => self.store.set(key, json, self.ttl).await,
            Err(e) => Err(e.into()),
        };
        if let Err(e) = stored {
            tracing::warn!("Failed to cache machines for {}: {}", key, e);
        }
    }

    async fn gate(&self, key: &str) -> Arc<Mutex<()>> {
        let mut gates = self.gates.lock().await;
        gates.entry(key.to_string()).or_default().clone()
    }
}
