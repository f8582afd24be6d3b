// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Generated machine lists for demos and client development
//!
//! Nothing here touches the upstream page or the cache.

use rand::Rng;
use rand::seq::SliceRandom;

use super::types::{BLANK_TIME, Machine, MachineKind, MachineStatus};

/// Upper bound on the length of [`random_data`]
pub const MAX_RANDOM_MACHINES: usize = 40;

/// Statuses a running laundry room reports
const LIVE_STATUSES: [MachineStatus; 4] = [
    MachineStatus::Available,
    MachineStatus::InUse,
    MachineStatus::AlmostDone,
    MachineStatus::EndOfCycle,
];

/// A machine list of random length (1 to [`MAX_RANDOM_MACHINES`]) and content
pub fn random_data() -> Vec<Machine> {
    let mut rng = rand::thread_rng();
    let count = rng.gen_range(1..=MAX_RANDOM_MACHINES);

    (0..count)
        .map(|i| {
            let kind = if rng.gen_bool(0.5) {
                MachineKind::Washer
            } else {
                MachineKind::Dryer
            };
            let status = LIVE_STATUSES
                .choose(&mut rng)
                .copied()
                .unwrap_or(MachineStatus::Available);
            let time_remaining = match status {
                MachineStatus::InUse => minutes_left(rng.gen_range(6..=60)),
                MachineStatus::AlmostDone => minutes_left(rng.gen_range(1..=5)),
                MachineStatus::EndOfCycle => minutes_left(0),
                _ => BLANK_TIME.to_string(),
            };
            machine(i, kind, status, time_remaining)
        })
        .collect()
}

/// A fixed list that exercises every kind, live status and time label shape
pub fn comprehensive_data() -> Vec<Machine> {
    let shapes = [
        (MachineKind::Washer, MachineStatus::Available, None),
        (MachineKind::Washer, MachineStatus::InUse, Some(34)),
        (MachineKind::Washer, MachineStatus::AlmostDone, Some(5)),
        (MachineKind::Washer, MachineStatus::EndOfCycle, Some(0)),
        (MachineKind::Dryer, MachineStatus::Available, None),
        (MachineKind::Dryer, MachineStatus::InUse, Some(52)),
        (MachineKind::Dryer, MachineStatus::AlmostDone, Some(1)),
        (MachineKind::Dryer, MachineStatus::EndOfCycle, Some(0)),
    ];

    shapes
        .into_iter()
        .enumerate()
        .map(|(i, (kind, status, minutes))| {
            let time_remaining = minutes.map_or_else(|| BLANK_TIME.to_string(), minutes_left);
            machine(i, kind, status, time_remaining)
        })
        .collect()
}

fn machine(
    index: usize,
    kind: MachineKind,
    status: MachineStatus,
    time_remaining: String,
) -> Machine {
    Machine {
        name: format!("{:03}", index + 1),
        kind,
        status,
        time_remaining,
    }
}

fn minutes_left(minutes: u32) -> String {
    if minutes == 1 {
        "1 minute left".to_string()
    } else {
        format!("{minutes} minutes left")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_random_data_length_varies() {
        let lengths: HashSet<usize> = (0..10).map(|_| random_data().len()).collect();
        assert!(lengths.len() > 1);
        assert!(lengths.iter().all(|&n| (1..=MAX_RANDOM_MACHINES).contains(&n)));
    }

    #[test]
    fn test_random_data_is_random() {
        let first = random_data();
        let differs = (0..5).any(|_| random_data() != first);
        assert!(differs);
    }

    #[test]
    fn test_random_data_time_matches_status() {
        for machine in random_data() {
            match machine.status {
                MachineStatus::Available => assert_eq!(machine.time_remaining, BLANK_TIME),
                MachineStatus::EndOfCycle => assert_eq!(machine.time_remaining, "0 minutes left"),
                _ => assert!(machine.time_remaining.ends_with("left")),
            }
        }
    }

    #[test]
    fn test_comprehensive_data_has_fixed_length() {
        assert_eq!(comprehensive_data().len(), comprehensive_data().len());
        assert_eq!(comprehensive_data(), comprehensive_data());
    }

    #[test]
    fn test_comprehensive_data_covers_every_shape() {
        let machines = comprehensive_data();

        let kinds: HashSet<MachineKind> = machines.iter().map(|m| m.kind).collect();
        assert_eq!(kinds, HashSet::from([MachineKind::Washer, MachineKind::Dryer]));

        let statuses: HashSet<MachineStatus> = machines.iter().map(|m| m.status).collect();
        assert_eq!(statuses, HashSet::from(LIVE_STATUSES));

        let times: HashSet<&str> = machines.iter().map(|m| m.time_remaining.as_str()).collect();
        for expected in [" ", "0 minutes left", "1 minute left", "5 minutes left"] {
            assert!(times.contains(expected), "missing time label {expected:?}");
        }
    }
}
