//! Registry listing state.
//!
//! The listing reloads the registry every time it becomes active, not only on
//! first display, so records saved elsewhere show up without a restart. A
//! failed reload keeps whatever was displayed before.

use crate::domain::VehicleRecord;
use crate::registry::RegistryStore;
use crate::storage::Storage;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

/// Load status of the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingStatus {
    /// Never loaded.
    Idle,
    /// A load is outstanding.
    Loading,
    /// The last load succeeded.
    Loaded,
    /// The last load failed; the previous records are still shown.
    LoadFailed(String),
}

/// Listing view over the registry.
#[derive(Debug, Clone)]
pub struct RegistryLister {
    status: ListingStatus,
    vehicles: Vec<VehicleRecord>,
    filter: String,
}

impl Default for RegistryLister {
    fn default() -> Self {
        Self::new()
    }
}

impl RegistryLister {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: ListingStatus::Idle,
            vehicles: Vec::new(),
            filter: String::new(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> &ListingStatus {
        &self.status
    }

    /// Records from the last successful load.
    #[must_use]
    pub fn vehicles(&self) -> &[VehicleRecord] {
        &self.vehicles
    }

    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn set_filter(&mut self, query: impl Into<String>) {
        self.filter = query.into();
    }

    /// Marks a load as outstanding.
    pub fn begin_refresh(&mut self) {
        tracing::debug!(shown = self.vehicles.len(), "listing refresh started");
        self.status = ListingStatus::Loading;
    }

    /// Replaces the displayed records with a fresh load.
    pub fn loaded(&mut self, vehicles: Vec<VehicleRecord>) {
        tracing::debug!(count = vehicles.len(), "listing loaded");
        self.vehicles = vehicles;
        self.status = ListingStatus::Loaded;
    }

    /// Records a failed load without discarding the displayed records.
    pub fn load_failed(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::warn!(error = %message, kept = self.vehicles.len(), "listing load failed");
        self.status = ListingStatus::LoadFailed(message);
    }

    /// Reloads synchronously from `store`.
    pub fn refresh<S: Storage>(&mut self, store: &RegistryStore<S>) {
        self.begin_refresh();
        match store.load_all() {
            Ok(vehicles) => self.loaded(vehicles),
            Err(e) => self.load_failed(e.to_string()),
        }
    }

    /// Records matching the current filter, in registry order.
    ///
    /// The filter is split on whitespace and every token must fuzzy-match the
    /// record's plate, brand, model, color or chassis.
    #[must_use]
    pub fn visible(&self) -> Vec<&VehicleRecord> {
        let tokens: Vec<String> = self
            .filter
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        if tokens.is_empty() {
            return self.vehicles.iter().collect();
        }

        let matcher = SkimMatcherV2::default().ignore_case();
        self.vehicles
            .iter()
            .filter(|record| {
                let haystack = record.search_text().to_lowercase();
                tokens
                    .iter()
                    .all(|token| matcher.fuzzy_match(&haystack, token).is_some())
            })
            .collect()
    }
}
