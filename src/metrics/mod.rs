// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Prometheus metrics for the scrape pipeline
//!
//! Contains label types and the metrics registry.

mod labels;
mod registry;


/// Per-location labels
pub use labels::LocationLabels;

/// Prometheus metrics registry
pub use registry::MetricsRegistry;
