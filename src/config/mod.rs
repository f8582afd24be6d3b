// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Configuration module for the laundry status service
//!
//! Loads and parses configuration from environment variables and JSON.

use serde::Deserialize;
use std::time::Duration;

use crate::error::{AppError, Result};
use crate::laundry::Location;


/// Default configuration values
pub mod defaults {
    pub const SERVER_ADDR: &str = "0.0.0.0:5000";
    pub const UPSTREAM_URL: &str =
        "http://wpvitassuds01.itap.purdue.edu/washalertweb/washalertweb.aspx";
    pub const CACHE_TTL_SECS: u64 = 60;
    pub const REFRESH_INTERVAL_SECS: u64 = 60;
    pub const FETCH_TIMEOUT_MS: u64 = 10_000;
}

/// Environment variable names used by the application
pub mod env_vars {
    pub const SERVER_ADDR: &str = "SERVER_ADDR";
    pub const UPSTREAM_URL: &str = "UPSTREAM_URL";
    pub const LOCATIONS_CONFIG: &str = "LOCATIONS_CONFIG";
    pub const CACHE_TTL_SECONDS: &str = "CACHE_TTL_SECONDS";
    pub const REFRESH_INTERVAL_SECONDS: &str = "REFRESH_INTERVAL_SECONDS";
    pub const FETCH_TIMEOUT_MS: &str = "FETCH_TIMEOUT_MS";
}

/// Static directory entry
#[derive(Debug, Clone, Deserialize)]
pub struct LocationConfig {
    pub name: String,
    pub id: String,
}

impl LocationConfig {
    /// Validates a directory entry
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Location name cannot be empty".to_string());
        }

        if uuid::Uuid::parse_str(self.id.trim()).is_err() {
            return Err(format!(
                "Invalid id '{}' for location '{}': expected a UUID",
                self.id, self.name
            ));
        }

        Ok(())
    }
}

impl From<LocationConfig> for Location {
    fn from(config: LocationConfig) -> Self {
        Location {
            name: config.name.trim().to_string(),
            id: config.id.trim().to_string(),
        }
    }
}

/// Application-wide configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_addr: String,
    pub upstream_url: String,
    /// Static directory; `None` means discover locations from the upstream page
    pub locations: Option<Vec<LocationConfig>>,
    pub cache_ttl_secs: u64,
    pub refresh_interval_secs: u64,
    pub fetch_timeout_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server_addr: defaults::SERVER_ADDR.to_string(),
            upstream_url: defaults::UPSTREAM_URL.to_string(),
            locations: None,
            cache_ttl_secs: defaults::CACHE_TTL_SECS,
            refresh_interval_secs: defaults::REFRESH_INTERVAL_SECS,
            fetch_timeout_ms: defaults::FETCH_TIMEOUT_MS,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let server_addr = std::env::var(env_vars::SERVER_ADDR)
            .unwrap_or_else(|_| defaults::SERVER_ADDR.to_string());

        let upstream_url = std::env::var(env_vars::UPSTREAM_URL)
            .unwrap_or_else(|_| defaults::UPSTREAM_URL.to_string());

        let locations = std::env::var(env_vars::LOCATIONS_CONFIG)
            .ok()
            .map(|json| parse_locations_config(&json));
        if locations.is_none() {
            tracing::info!(
                "{} not set, locations will be discovered from {}",
                env_vars::LOCATIONS_CONFIG,
                upstream_url
            );
        }

        Config {
            server_addr,
            upstream_url,
            locations,
            cache_ttl_secs: env_u64(env_vars::CACHE_TTL_SECONDS, defaults::CACHE_TTL_SECS),
            refresh_interval_secs: env_u64(
                env_vars::REFRESH_INTERVAL_SECONDS,
                defaults::REFRESH_INTERVAL_SECS,
            ),
            fetch_timeout_ms: env_u64(env_vars::FETCH_TIMEOUT_MS, defaults::FETCH_TIMEOUT_MS),
        }
    }

    /// Rejects settings the service cannot run with
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` for zero durations or an empty upstream URL.
    pub fn validate(&self) -> Result<()> {
        if self.upstream_url.trim().is_empty() {
            return Err(AppError::Config("Upstream URL cannot be empty".to_string()));
        }
        if self.cache_ttl_secs == 0 {
            return Err(AppError::Config("Cache TTL must be positive".to_string()));
        }
        if self.refresh_interval_secs == 0 {
            return Err(AppError::Config(
                "Refresh interval must be positive".to_string(),
            ));
        }
        if self.fetch_timeout_ms == 0 {
            return Err(AppError::Config("Fetch timeout must be positive".to_string()));
        }
        Ok(())
    }

    #[must_use]
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_secs)
    }

    #[must_use]
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_secs)
    }

    #[must_use]
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }

    /// Valid static directory entries, if a static directory is configured
    #[must_use]
    pub fn static_locations(&self) -> Option<Vec<Location>> {
        self.locations.as_ref().map(|entries| {
            entries
                .iter()
                .filter(|entry| match entry.validate() {
                    Ok(()) => true,
                    Err(e) => {
                        tracing::error!("Invalid location configuration: {}", e);
                        tracing::warn!("Skipping invalid location: {}", entry.name);
                        false
                    }
                })
                .cloned()
                .map(Location::from)
                .collect()
        })
    }
}

fn parse_locations_config(json: &str) -> Vec<LocationConfig> {
    serde_json::from_str(json).unwrap_or_else(|e| {
        tracing::warn!(
            "Failed to parse {}: {}. Using empty list.",
            env_vars::LOCATIONS_CONFIG,
            e
        );
        vec![]
    })
}

fn env_u64(name: &str, default: u64) -> u64 {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
            tracing::warn!("Invalid {}='{}', using default {}", name, raw, default);
            default
        }),
        Err(_) => default,
    }
}
