// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

mod common;

use common::{
    BASE, CARY_FULL_PAGE, CARY_ID, CARY_MACHINES, JUST_MACHINES, StubFetcher, directory,
    location_url,
};
use laundry_status::{
    AppError, BLANK_TIME, CacheStore, MachineKind, MachineStatus, MemoryStore, MetricsRegistry,
    ScrapeStatus, Scraper, parse_locations, parse_machines,
};
use std::sync::Arc;
use std::time::Duration;

const TTL: Duration = Duration::from_secs(60);

fn scraper(fetcher: Arc<StubFetcher>, store: MemoryStore) -> Scraper {
    Scraper::new(
        directory(),
        Arc::new(store),
        fetcher,
        MetricsRegistry::new(),
        TTL,
    )
}

// --- parser fixtures ---

#[test]
fn full_page_and_bare_table_parse_identically() {
    let bare = parse_machines(CARY_MACHINES);
    let full = parse_machines(CARY_FULL_PAGE);

    assert_eq!(bare.len(), 5);
    assert_eq!(bare, full);

    assert_eq!(bare[0].name, "001");
    assert_eq!(bare[0].time_remaining, BLANK_TIME);
    assert_eq!(bare[2].status, MachineStatus::InUse);
    assert_eq!(bare[2].time_remaining, "34 minutes left");
    assert_eq!(bare[3].kind, MachineKind::Dryer);
    assert_eq!(bare[4].time_remaining, "1 minute left");
}

#[test]
fn rows_without_table_parse_like_clean_table() {
    let machines = parse_machines(JUST_MACHINES);
    assert_eq!(machines.len(), 5);
    assert_eq!(machines, parse_machines(CARY_MACHINES));
}

#[test]
fn full_page_yields_location_picker() {
    let locations = parse_locations(CARY_FULL_PAGE);
    let names: Vec<&str> = locations.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Cary Quad East Laundry",
            "Earhart Laundry Room",
            "Harrison Laundry Room"
        ]
    );
    assert_eq!(locations[0].id, CARY_ID);
}

#[test]
fn bare_machine_table_has_no_locations() {
    assert!(parse_locations(CARY_MACHINES).is_empty());
}

// --- orchestration over fixtures ---

#[tokio::test]
async fn cary_scenario_serves_second_call_from_cache() {
    let fetcher = Arc::new(StubFetcher::default());
    fetcher.serve(&location_url(CARY_ID), CARY_FULL_PAGE);
    let store = MemoryStore::new();
    let scraper = scraper(fetcher.clone(), store.clone());

    let first = scraper.report_location("Cary").await.unwrap();
    assert_eq!(first.status, ScrapeStatus::Fresh);
    assert_eq!(first.machines.len(), 5);
    let washers = first
        .machines
        .iter()
        .filter(|m| m.kind == MachineKind::Washer)
        .count();
    let available = first
        .machines
        .iter()
        .filter(|m| m.status == MachineStatus::Available)
        .count();
    assert_eq!(washers, 3);
    assert_eq!(available, 2);

    let second = scraper.report_location("cary").await.unwrap();
    assert_eq!(second.status, ScrapeStatus::Cached);
    assert_eq!(second.machines, first.machines);
    assert_eq!(fetcher.calls(), 1);

    let cached = store.get("Cary").await.unwrap().unwrap();
    let decoded: Vec<laundry_status::Machine> = serde_json::from_str(&cached).unwrap();
    assert_eq!(decoded, first.machines);
}

#[tokio::test]
async fn unknown_location_writes_nothing() {
    let fetcher = Arc::new(StubFetcher::default());
    let store = MemoryStore::new();
    let scraper = scraper(fetcher.clone(), store.clone());

    let result = scraper.scrape_location("Nonexistent Hall").await;
    assert!(matches!(result, Err(AppError::LocationNotFound(_))));
    assert!(store.is_empty().await);
    assert_eq!(fetcher.calls(), 0);
}

#[tokio::test]
async fn upstream_down_then_recovered() {
    let fetcher = Arc::new(StubFetcher::default());
    let store = MemoryStore::new();
    let scraper = scraper(fetcher.clone(), store.clone());

    let machines = scraper.scrape_location("Cary").await.unwrap();
    assert!(machines.is_empty());
    assert!(!store.exists("Cary").await.unwrap());

    fetcher.serve(&location_url(CARY_ID), CARY_MACHINES);
    let machines = scraper.scrape_location("Cary").await.unwrap();
    assert_eq!(machines.len(), 5);
    assert!(store.exists("Cary").await.unwrap());
}

#[tokio::test]
async fn discovery_uses_upstream_option_labels() {
    let fetcher = Arc::new(StubFetcher::default());
    fetcher.serve(BASE, CARY_FULL_PAGE);
    fetcher.serve(&location_url(CARY_ID), CARY_FULL_PAGE);
    let scraper = Scraper::with_discovery(
        BASE,
        Arc::new(MemoryStore::new()),
        fetcher.clone(),
        MetricsRegistry::new(),
        TTL,
    );

    let machines = scraper
        .scrape_location("cary quad east laundry")
        .await
        .unwrap();
    assert_eq!(machines.len(), 5);

    let reports = scraper.scrape_all().await;
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].status, ScrapeStatus::Cached);
    assert_eq!(reports[1].status, ScrapeStatus::Unavailable);
    assert_eq!(reports[2].status, ScrapeStatus::Unavailable);
}
