// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Per-location scrape results

use serde::{Deserialize, Serialize};

use crate::laundry::Machine;

/// Where the machines in a report came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScrapeStatus {
    /// Served from a live cache entry
    Cached,
    /// Fetched and parsed just now
    Fresh,
    /// Upstream failed; last known good machines
    Stale,
    /// Upstream failed and nothing was cached
    Unavailable,
}

/// Machines for one location plus how they were obtained
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationReport {
    pub location: String,
    pub status: ScrapeStatus,
    pub machines: Vec<Machine>,
}

impl LocationReport {
    pub fn new(location: impl Into<String>, status: ScrapeStatus, machines: Vec<Machine>) -> Self {
        Self {
            location: location.into(),
            status,
            machines,
        }
    }

    /// Whether the upstream could not be reached for this report
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self.status, ScrapeStatus::Stale | ScrapeStatus::Unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_serializes_lowercase_status() {
        let report = LocationReport::new("Cary", ScrapeStatus::Unavailable, Vec::new());
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["location"], "Cary");
        assert_eq!(json["status"], "unavailable");
        assert!(json["machines"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_failure_statuses() {
        assert!(LocationReport::new("a", ScrapeStatus::Stale, Vec::new()).is_failure());
        assert!(LocationReport::new("a", ScrapeStatus::Unavailable, Vec::new()).is_failure());
        assert!(!LocationReport::new("a", ScrapeStatus::Fresh, Vec::new()).is_failure());
        assert!(!LocationReport::new("a", ScrapeStatus::Cached, Vec::new()).is_failure());
    }
}
