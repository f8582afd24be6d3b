// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Location directory: canonical names to upstream query URLs

use std::collections::HashSet;

use crate::error::{AppError, Result};

use super::types::Location;

/// Immutable snapshot of the scrapeable locations
#[derive(Debug, Clone, Default)]
pub struct Directory {
    base_url: String,
    locations: Vec<Location>,
}

impl Directory {
    /// Builds a directory, dropping entries whose name repeats an earlier one
    /// (case-insensitively).
    #[must_use]
    pub fn new(base_url: impl Into<String>, locations: Vec<Location>) -> Self {
        let mut seen = HashSet::new();
        let locations = locations
            .into_iter()
            .filter(|location| {
                let fresh = seen.insert(normalize(&location.name));
                if !fresh {
                    tracing::warn!("Duplicate location '{}' ignored", location.name);
                }
                fresh
            })
            .collect();

        Self {
            base_url: base_url.into(),
            locations,
        }
    }

    /// Directory with no locations yet (discovery pending)
    #[must_use]
    pub fn empty(base_url: impl Into<String>) -> Self {
        Self::new(base_url, Vec::new())
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// All locations in directory order
    #[must_use]
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Exact, case-insensitive lookup by canonical name
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Location> {
        let wanted = normalize(name);
        self.locations
            .iter()
            .find(|location| normalize(&location.name) == wanted)
    }

    /// Upstream query URL for a location name
    ///
    /// # Errors
    ///
    /// Returns `AppError::LocationNotFound` when the name is not in the directory.
    pub fn resolve(&self, name: &str) -> Result<String> {
        self.lookup(name)
            .map(|location| self.url_for(location))
            .ok_or_else(|| AppError::LocationNotFound(name.to_string()))
    }

    /// Upstream query URL for a known location
    #[must_use]
    pub fn url_for(&self, location: &Location) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!("{}{}location={}", self.base_url, separator, location.id)
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "http://washalert.example/washalertweb.aspx";

    fn location(name: &str, id: &str) -> Location {
        Location {
            name: name.to_string(),
            id: id.to_string(),
        }
    }

    fn directory() -> Directory {
        Directory::new(
            BASE,
            vec![
                location("Cary", "8ac5b2a4-6c2d-4b47-9d4e-1b9a4f0c7e11"),
                location("Earhart", "a0728ede-60be-4155-8ca9-dcde37ad431d"),
            ],
        )
    }

    #[test]
    fn test_resolve_is_case_insensitive() {
        let dir = directory();
        let upper = dir.resolve("Earhart").unwrap();
        let lower = dir.resolve("earhart").unwrap();
        let shouting = dir.resolve("EARHART").unwrap();

        assert_eq!(upper, lower);
        assert_eq!(upper, shouting);
        assert_eq!(
            upper,
            format!("{BASE}?location=a0728ede-60be-4155-8ca9-dcde37ad431d")
        );
    }

    #[test]
    fn test_resolve_unknown_location() {
        let dir = directory();
        let err = dir.resolve("is this the krusty krab?").unwrap_err();
        assert!(matches!(err, AppError::LocationNotFound(name) if name == "is this the krusty krab?"));
    }

    #[test]
    fn test_lookup_is_exact_not_fuzzy() {
        let dir = directory();
        assert!(dir.lookup("Car").is_none());
        assert!(dir.lookup("Cary Quad").is_none());
        assert!(dir.lookup(" cary ").is_some());
    }

    #[test]
    fn test_duplicate_names_keep_first() {
        let dir = Directory::new(
            BASE,
            vec![
                location("Cary", "8ac5b2a4-6c2d-4b47-9d4e-1b9a4f0c7e11"),
                location("CARY", "00000000-0000-0000-0000-000000000000"),
            ],
        );
        assert_eq!(dir.len(), 1);
        assert_eq!(
            dir.lookup("cary").unwrap().id,
            "8ac5b2a4-6c2d-4b47-9d4e-1b9a4f0c7e11"
        );
    }

    #[test]
    fn test_url_for_appends_to_existing_query() {
        let dir = Directory::new("http://host/page.aspx?lang=en", vec![location("Cary", "abc")]);
        assert_eq!(
            dir.resolve("Cary").unwrap(),
            "http://host/page.aspx?lang=en&location=abc"
        );
    }

    #[test]
    fn test_locations_preserve_order() {
        let dir = directory();
        let names: Vec<&str> = dir.locations().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Cary", "Earhart"]);
        assert!(Directory::empty(BASE).is_empty());
    }
}
