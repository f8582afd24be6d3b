// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Type definitions for laundry locations and machines

use serde::{Deserialize, Serialize};
use std::fmt;

/// Placeholder used when the upstream page shows no remaining time
pub const BLANK_TIME: &str = " ";

/// A laundry room known to the upstream status page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Canonical, user-facing name (unique, matched case-insensitively)
    pub name: String,
    /// Opaque upstream identifier (UUID-shaped)
    pub id: String,
}

/// Washer or dryer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MachineKind {
    Washer,
    Dryer,
}

/// Normalized machine status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MachineStatus {
    #[serde(rename = "Available")]
    Available,
    #[serde(rename = "In Use")]
    InUse,
    #[serde(rename = "Almost Done")]
    AlmostDone,
    #[serde(rename = "End of Cycle")]
    EndOfCycle,
    #[serde(rename = "Out of Order")]
    OutOfOrder,
    #[serde(rename = "Offline")]
    Offline,
    #[serde(rename = "Ready To Start")]
    ReadyToStart,
}

impl MachineStatus {
    /// Every status, in the order exposed by the API
    pub const ALL: [MachineStatus; 7] = [
        MachineStatus::Available,
        MachineStatus::InUse,
        MachineStatus::AlmostDone,
        MachineStatus::EndOfCycle,
        MachineStatus::OutOfOrder,
        MachineStatus::Offline,
        MachineStatus::ReadyToStart,
    ];

    /// Display label, identical to the serialized form
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            MachineStatus::Available => "Available",
            MachineStatus::InUse => "In Use",
            MachineStatus::AlmostDone => "Almost Done",
            MachineStatus::EndOfCycle => "End of Cycle",
            MachineStatus::OutOfOrder => "Out of Order",
            MachineStatus::Offline => "Offline",
            MachineStatus::ReadyToStart => "Ready To Start",
        }
    }

    /// Maps an upstream status label onto the fixed set.
    ///
    /// Matching ignores case and repeated whitespace. Anything unrecognized is
    /// reported as `Offline` so a single odd row never breaks a page.
    #[must_use]
    pub fn from_label(raw: &str) -> Self {
        let normalized = raw
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();

        Self::ALL
            .into_iter()
            .find(|status| status.label().to_lowercase() == normalized)
            .unwrap_or(MachineStatus::Offline)
    }
}

impl fmt::Display for MachineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One machine as shown on the upstream page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Machine {
    /// Machine label printed on the page (may be empty)
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub kind: MachineKind,
    pub status: MachineStatus,
    /// Human readable label such as "5 minutes left", or `BLANK_TIME`
    #[serde(rename = "time")]
    pub time_remaining: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels_in_api_order() {
        let labels: Vec<&str> = MachineStatus::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(
            labels,
            vec![
                "Available",
                "In Use",
                "Almost Done",
                "End of Cycle",
                "Out of Order",
                "Offline",
                "Ready To Start"
            ]
        );
    }

    #[test]
    fn test_status_from_label_ignores_case_and_spacing() {
        assert_eq!(MachineStatus::from_label("In use"), MachineStatus::InUse);
        assert_eq!(
            MachineStatus::from_label("  END   OF cycle "),
            MachineStatus::EndOfCycle
        );
        assert_eq!(
            MachineStatus::from_label("Ready to start"),
            MachineStatus::ReadyToStart
        );
    }

    #[test]
    fn test_unknown_status_maps_to_offline() {
        assert_eq!(MachineStatus::from_label("Spinning"), MachineStatus::Offline);
        assert_eq!(MachineStatus::from_label(""), MachineStatus::Offline);
    }

    #[test]
    fn test_machine_serializes_with_upstream_field_names() {
        let machine = Machine {
            name: "007".to_string(),
            kind: MachineKind::Dryer,
            status: MachineStatus::AlmostDone,
            time_remaining: "5 minutes left".to_string(),
        };

        let json = serde_json::to_value(&machine).unwrap();
        assert_eq!(json["name"], "007");
        assert_eq!(json["type"], "Dryer");
        assert_eq!(json["status"], "Almost Done");
        assert_eq!(json["time"], "5 minutes left");
    }

    #[test]
    fn test_status_serialization_matches_label() {
        for status in MachineStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.label()));
        }
    }
}
