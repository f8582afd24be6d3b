// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Laundry domain module
//!
//! Locations, machines, the location directory, the upstream fetcher, the
//! WashAlert HTML parsers and generated demo data.

mod directory;
mod fetcher;
mod mock;
mod parse;
mod types;

// Re-export public types and functions
pub use directory::Directory;
pub use fetcher::{FetchError, Fetcher, HttpFetcher};
pub use mock::{comprehensive_data, random_data};
pub use parse::{parse_locations, parse_machines};
pub use types::{BLANK_TIME, Location, Machine, MachineKind, MachineStatus};
