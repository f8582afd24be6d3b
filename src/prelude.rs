// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prelude module for convenient imports
//!
//! This module re-exports commonly used types and traits for convenient use.
//! Users of the library can import everything they need with:
//!
//! ```rust
//! use laundry_status::prelude::*;
//! ```

// Core types
pub use crate::config::{Config, LocationConfig};
pub use crate::error::{AppError, Result};

// Domain types
pub use crate::laundry::{
    Directory, FetchError, Fetcher, HttpFetcher, Location, Machine, MachineKind, MachineStatus,
};

// Cache and orchestration
pub use crate::cache::{CacheStore, MemoryStore};
pub use crate::metrics::{LocationLabels, MetricsRegistry};
pub use crate::scrape::{LocationReport, ScrapeStatus, Scraper};
