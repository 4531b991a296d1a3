//! Core data structures for parsed pollen observations.
//!
//! A fetch produces a [`Dataset`]: one [`Entry`] per observation station,
//! each holding that station's hourly [`Observation`]s in input order. The
//! dataset is built in a single parse pass and is not mutated afterwards.

use chrono::DateTime;
use chrono_tz::Tz;
use serde::Serialize;
use std::collections::HashMap;

/// One hourly pollen sample
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observation {
    /// Local time of the observation hour
    pub timestamp: DateTime<Tz>,

    /// Raw airborne pollen count; unit-less, no upper bound
    pub count: u32,
}

/// Accumulated observation history of one station
#[derive(Debug, Clone, Serialize)]
pub struct Entry {
    /// Station name as it appears in the feed, full-width characters
    /// preserved
    pub name: String,

    /// Samples in input row order; duplicates are kept as delivered
    pub observations: Vec<Observation>,
}

impl Entry {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            observations: Vec::new(),
        }
    }
}

/// Complete parse result, keyed by station name
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct Dataset {
    entries: HashMap<String, Entry>,
}

impl Dataset {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append an observation to the named station, creating its entry on
    /// first sight
    pub(crate) fn record(&mut self, name: &str, observation: Observation) {
        self.entries
            .entry(name.to_string())
            .or_insert_with(|| Entry::new(name))
            .observations
            .push(observation);
    }

    /// Look up a station's history by name
    pub fn get(&self, name: &str) -> Option<&Entry> {
        self.entries.get(name)
    }

    /// Iterate over station names, in no particular order
    pub fn station_names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over station entries, in no particular order
    pub fn entries(&self) -> impl Iterator<Item = &Entry> {
        self.entries.values()
    }

    /// Number of distinct stations encountered
    pub fn station_count(&self) -> usize {
        self.entries.len()
    }

    /// Total number of observations across all stations
    pub fn observation_count(&self) -> usize {
        self.entries.values().map(|e| e.observations.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
