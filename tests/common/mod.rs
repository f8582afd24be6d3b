// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

#![allow(dead_code)]

use async_trait::async_trait;
use laundry_status::{Directory, FetchError, Fetcher, Location};
use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const BASE: &str = "http://washalert.test/washalertweb/washalertweb.aspx";
pub const CARY_ID: &str = "8ac5b2a4-6c2d-4b47-9d4e-1b9a4f0c7e11";
pub const EARHART_ID: &str = "a0728ede-60be-4155-8ca9-dcde37ad431d";

pub const CARY_MACHINES: &str = include_str!("../fixtures/cary_machines.html");
pub const CARY_FULL_PAGE: &str = include_str!("../fixtures/cary_full_page.html");
pub const JUST_MACHINES: &str = include_str!("../fixtures/just_machines.html");

/// Canned upstream: serves pages by URL, anything else is unreachable
#[derive(Default)]
pub struct StubFetcher {
    pages: Mutex<HashMap<String, String>>,
    calls: AtomicUsize,
}

impl StubFetcher {
    pub fn serve(&self, url: &str, html: &str) {
        self.pages
            .lock()
            .unwrap()
            .insert(url.to_string(), html.to_string());
    }

    pub fn take_down(&self, url: &str) {
        self.pages.lock().unwrap().remove(url);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Fetcher for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let page = self.pages.lock().unwrap().get(url).cloned();
        page.ok_or(FetchError::Status(503))
    }
}

pub fn location_url(id: &str) -> String {
    format!("{BASE}?location={id}")
}

pub fn directory() -> Directory {
    Directory::new(
        BASE,
        vec![
            Location {
                name: "Cary".to_string(),
                id: CARY_ID.to_string(),
            },
            Location {
                name: "Earhart".to_string(),
                id: EARHART_ID.to_string(),
            },
        ],
    )
}
