// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Laundry Status
//!
//! Near-real-time laundry machine availability for a fixed set of laundry
//! rooms, scraped from the WashAlert HTML status page.
//!
//! The pipeline resolves a location name to an upstream URL, fetches and
//! parses the page into machine records, and keeps the result in a short-lived
//! cache that a background loop refreshes proactively.
//!
//! ## Main modules
//! - `api`: HTTP API handlers
//! - `cache`: key/value store with per-key expiration
//! - `config`: configuration management
//! - `error`: error types
//! - `laundry`: locations, machines, directory, fetcher and HTML parsers
//! - `metrics`: Prometheus metrics registry
//! - `refresh`: background refresh and cache cleanup tasks
//! - `scrape`: cache-or-fetch orchestration
//! - `prelude`: commonly used types and traits

mod api;
mod cache;
mod config;
mod error;
mod laundry;
mod metrics;
mod refresh;
mod scrape;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::{Config, LocationConfig};

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Cache store contract and in-memory implementation
pub use cache::{CacheStore, MemoryStore};

/// Laundry domain types, directory, fetcher and parsers
pub use laundry::{
    BLANK_TIME, Directory, FetchError, Fetcher, HttpFetcher, Location, Machine, MachineKind,
    MachineStatus, comprehensive_data, parse_locations, parse_machines, random_data,
};

/// Metrics registry and labels
pub use metrics::{LocationLabels, MetricsRegistry};

/// Background tasks
pub use refresh::{start_cache_cleanup_task, start_refresh_loop};

/// Scrape orchestration
pub use scrape::{LocationReport, ScrapeStatus, Scraper};
