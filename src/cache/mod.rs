// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Key/value cache with per-key expiration
//!
//! The orchestrator talks to the [`CacheStore`] trait only, so a networked
//! backend can replace [`MemoryStore`] without changing scrape behavior.

mod memory;

use async_trait::async_trait;
use std::time::Duration;

use crate::error::Result;

pub use memory::MemoryStore;

/// Store contract: atomic set-with-expiry, reads that never see expired keys
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Current value, or `None` when missing or expired
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value and arms its expiration as one operation
    async fn set(&self, key: &str, value: String, ttl: Duration) -> Result<()>;

    /// Whether a live (non-expired) value exists
    async fn exists(&self, key: &str) -> Result<bool>;
}
