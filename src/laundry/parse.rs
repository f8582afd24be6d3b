// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Parsers for the WashAlert status page
//!
//! This is the only module that knows the upstream markup. Both parsers are
//! total: malformed or unexpected HTML produces an empty result, never an error.
//!
//! Expected shape:
//! - locations: `<option value="{uuid}">{name}</option>` inside the location picker
//! - machines: one `<tr>` per machine with `td.name`, `td.type`, `td.status`
//!   and `td.time` cells

use scraper::{ElementRef, Html, Selector};
use std::collections::HashSet;
use uuid::Uuid;

use super::types::{BLANK_TIME, Location, Machine, MachineKind, MachineStatus};

/// Extracts selectable locations from the location picker.
///
/// Options whose value is not a UUID (placeholders, "all", etc.) are skipped,
/// as are labels that repeat an earlier one.
pub fn parse_locations(html: &str) -> Vec<Location> {
    let Ok(options) = Selector::parse("option") else {
        return Vec::new();
    };
    let document = Html::parse_document(html);

    let mut seen = HashSet::new();
    document
        .select(&options)
        .filter_map(|option| {
            let id = option.value().attr("value")?.trim();
            Uuid::parse_str(id).ok()?;
            let name = collapse(&option.text().collect::<String>());
            if name.is_empty() || !seen.insert(name.to_lowercase()) {
                return None;
            }
            Some(Location {
                name,
                id: id.to_string(),
            })
        })
        .collect()
}

/// Extracts machines in page order.
///
/// A row is a machine when it has direct `type` and `status` cells and the
/// type reads as a washer or a dryer.
pub fn parse_machines(html: &str) -> Vec<Machine> {
    let (Ok(rows), Ok(tables)) = (Selector::parse("tr"), Selector::parse("table")) else {
        return Vec::new();
    };
    let mut document = Html::parse_document(html);

    // The tree builder drops `tr`/`td` tags outside a table, so bare rows
    // get a table context
    if document.select(&tables).next().is_none() {
        document = Html::parse_document(&format!("<table>{html}</table>"));
    }

    let machines: Vec<Machine> = document.select(&rows).filter_map(machine_from_row).collect();
    tracing::trace!("Parsed {} machine rows", machines.len());
    machines
}

fn machine_from_row(row: ElementRef<'_>) -> Option<Machine> {
    let kind = classify(&cell_text(row, "type")?)?;
    let status = MachineStatus::from_label(&cell_text(row, "status")?);
    let name = cell_text(row, "name").unwrap_or_default();
    let time_remaining = cell_text(row, "time")
        .filter(|time| !time.is_empty())
        .unwrap_or_else(|| BLANK_TIME.to_string());

    Some(Machine {
        name,
        kind,
        status,
        time_remaining,
    })
}

fn classify(raw: &str) -> Option<MachineKind> {
    let lowered = raw.to_lowercase();
    if lowered.contains("dryer") {
        Some(MachineKind::Dryer)
    } else if lowered.contains("washer") {
        Some(MachineKind::Washer)
    } else {
        None
    }
}

/// Text of the first direct `<td>` child carrying `class`.
///
/// Only direct children are considered so layout tables wrapping the machine
/// table do not produce phantom rows.
fn cell_text(row: ElementRef<'_>, class: &str) -> Option<String> {
    row.children()
        .filter_map(ElementRef::wrap)
        .find(|cell| {
            cell.value().name() == "td"
                && cell
                    .value()
                    .classes()
                    .any(|c| c.eq_ignore_ascii_case(class))
        })
        .map(|cell| collapse(&cell.text().collect::<String>()))
}

// `&nbsp;` decodes to U+00A0, which `split_whitespace` treats as whitespace.
fn collapse(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
