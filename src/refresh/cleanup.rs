// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Expired cache entry cleanup task
//!
//! Expired entries are already invisible to readers; this task only reclaims
//! their memory.

use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::cache::MemoryStore;

/// Cleanup interval for expired cache entries (60 seconds)
const CLEANUP_INTERVAL: Duration = Duration::from_secs(60);

/// Starts a background task that purges expired entries every 60 seconds
/// until shutdown is signalled or the sender is dropped.
pub fn start_cache_cleanup_task(
    store: MemoryStore,
    mut shutdown_rx: watch::Receiver<bool>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut cleanup_ticker = tokio::time::interval(CLEANUP_INTERVAL);
        loop {
            tokio::select! {
                _ = cleanup_ticker.tick() => {
                    store.purge_expired().await;
                },
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        tracing::debug!("Stopping cache cleanup");
                        break;
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::CacheStore;

    #[tokio::test]
    async fn test_cleanup_task_respects_shutdown_signal() {
        let store = MemoryStore::new();
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let handle = start_cache_cleanup_task(store.clone(), shutdown_rx);

        tokio::time::sleep(Duration::from_millis(50)).await;
        let _ = shutdown_tx.send(true);

        let stopped = tokio::time::timeout(Duration::from_secs(1), handle).await;
        assert!(stopped.is_ok(), "Cleanup task should stop on shutdown");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_task_stops_when_sender_dropped() {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        drop(shutdown_tx);

        let handle = start_cache_cleanup_task(MemoryStore::new(), shutdown_rx);
        let stopped = tokio::time::timeout(Duration::from_secs(1), handle).await;
        assert!(stopped.is_ok(), "Cleanup task should stop without a sender");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cleanup_task_purges_expired_entries() {
        let store = MemoryStore::new();
        store
            .set("Cary", "[]".to_string(), Duration::from_secs(5))
            .await
            .unwrap();
        let (_shutdown_tx, shutdown_rx) = watch::channel(false);

        let _handle = start_cache_cleanup_task(store.clone(), shutdown_rx);
        tokio::time::sleep(CLEANUP_INTERVAL + Duration::from_secs(1)).await;

        assert!(store.is_empty().await);
    }

    #[test]
    fn test_cleanup_interval_constant_is_60_seconds() {
        assert_eq!(CLEANUP_INTERVAL, Duration::from_secs(60));
    }
}
