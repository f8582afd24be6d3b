// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Error types for the laundry status service

use thiserror::Error;

use crate::laundry::FetchError;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Requested location is not in the directory
    #[error("Unknown location: {0}")]
    LocationNotFound(String),

    /// Upstream status page could not be fetched
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    /// Cache store error
    #[error("Cache error: {0}")]
    Cache(String),

    /// Metrics encoding error
    #[error("Metrics error: {0}")]
    Metrics(String),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl From<serde_json::Error> for AppError {
    fn from(error: serde_json::Error) -> Self {
        Self::Cache(error.to_string())
    }
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
