// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod health;
mod machines;
mod metrics;

pub use health::health_check;
pub use machines::{
    all_locations, demo_machines, list_locations, machines_at_location, possible_statuses,
};
pub use metrics::metrics_handler;
