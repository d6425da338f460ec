//! Weather temperature store over the dualstore dense/sparse pattern.
//!
//! Two independent structures:
//!
//! - **dense**: a `years x cities` grid fixed at construction. Every cell
//!   starts absent; unknown year/city labels make writes no-ops.
//! - **sparse**: exact-date readings, `date -> city -> temperature`, for data
//!   that does not belong on the year axis.
//!
//! Nothing written to one side is visible from the other.
//!
//! Absence is `None`. Callers that still speak the numeric sentinel contract
//! use the `*_or_sentinel` helpers, which map `None` to [`SENTINEL`].

pub mod config;
pub mod report;

#[cfg(test)]
mod tests;

use anyhow::Result;
use chrono::NaiveDate;
use dualstore_core::{
    snapshot, Axis, ComplexityEntry, ComplexityReport, Grid, NestedOverlay, StoreError,
    StoreResult,
};
use serde::{Deserialize, Serialize};

pub use config::WeatherConfig;

/// Stand-in for "no reading" in the sentinel-based API.
pub const SENTINEL: f64 = -9999.0;

const SNAPSHOT_MAGIC: &[u8; 4] = b"DSWX";
const SNAPSHOT_VERSION: u32 = 1;

pub const WEATHER_COMPLEXITY: ComplexityReport = ComplexityReport {
    title: "Complexity Analysis",
    entries: &[
        ComplexityEntry {
            operation: "Insert",
            cost: "O(1) for both dense and sparse storage",
        },
        ComplexityEntry {
            operation: "Delete",
            cost: "O(1) for both dense and sparse storage",
        },
        ComplexityEntry {
            operation: "Retrieve",
            cost: "O(1) for both dense and sparse storage",
        },
        ComplexityEntry {
            operation: "Space (dense matrix)",
            cost: "O(years * cities)",
        },
        ComplexityEntry {
            operation: "Space (sparse map)",
            cost: "O(k), where k is the number of stored entries",
        },
    ],
};

/// Map an optional reading onto the sentinel contract.
pub fn or_sentinel(value: Option<f64>) -> f64 {
    value.unwrap_or(SENTINEL)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherStore {
    dense: Grid<f64>,
    readings: NestedOverlay<NaiveDate, String, f64>,
}

impl Default for WeatherStore {
    fn default() -> Self {
        Self::from_config(&WeatherConfig::default())
    }
}

impl WeatherStore {
    pub fn new<Y, C, S, T>(years: Y, cities: C) -> Self
    where
        Y: IntoIterator<Item = S>,
        S: Into<String>,
        C: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self {
            dense: Grid::new(Axis::new(years), Axis::new(cities)),
            readings: NestedOverlay::new(),
        }
    }

    pub fn from_config(config: &WeatherConfig) -> Self {
        Self::new(config.years.iter().cloned(), config.cities.iter().cloned())
    }

    pub fn years(&self) -> &[String] {
        self.dense.rows().labels()
    }

    pub fn cities(&self) -> &[String] {
        self.dense.cols().labels()
    }

    /// `(years, cities)`.
    pub fn shape(&self) -> (usize, usize) {
        self.dense.shape()
    }

    pub fn complexity() -> &'static ComplexityReport {
        &WEATHER_COMPLEXITY
    }

    // ========================================================================
    // Dense (year x city)
    // ========================================================================

    /// Write a yearly reading, overwriting any previous value. Returns `false`
    /// and changes nothing if the year or city is not on the grid.
    pub fn insert_dense(&mut self, year: &str, city: &str, temperature: f64) -> bool {
        let stored = self.dense.set(year, city, temperature);
        if stored {
            tracing::debug!(year, city, temperature, "dense reading stored");
        } else {
            tracing::debug!(year, city, "dense insert ignored: unknown label");
        }
        stored
    }

    /// Like `insert_dense`, but an unknown label is an error. Returns the
    /// value that was overwritten.
    pub fn try_insert_dense(
        &mut self,
        year: &str,
        city: &str,
        temperature: f64,
    ) -> StoreResult<Option<f64>> {
        self.dense.try_set(year, city, temperature)
    }

    /// Reset a yearly reading to absent. Returns `false` for unknown labels.
    pub fn delete_dense(&mut self, year: &str, city: &str) -> bool {
        let cleared = self.dense.clear(year, city);
        if cleared {
            tracing::debug!(year, city, "dense reading cleared");
        }
        cleared
    }

    pub fn retrieve_dense(&self, year: &str, city: &str) -> Option<f64> {
        self.dense.get(year, city)
    }

    pub fn retrieve_dense_or_sentinel(&self, year: &str, city: &str) -> f64 {
        or_sentinel(self.retrieve_dense(year, city))
    }

    /// Every cell, year by year, cities in axis order.
    pub fn row_major(&self) -> Vec<Option<f64>> {
        self.dense.row_major()
    }

    /// Every cell, city by city, years in axis order.
    pub fn column_major(&self) -> Vec<Option<f64>> {
        self.dense.column_major()
    }

    pub fn row_major_or_sentinel(&self) -> Vec<f64> {
        self.row_major().into_iter().map(or_sentinel).collect()
    }

    pub fn column_major_or_sentinel(&self) -> Vec<f64> {
        self.column_major().into_iter().map(or_sentinel).collect()
    }

    pub fn dense_filled(&self) -> usize {
        self.dense.filled_count()
    }

    // ========================================================================
    // Sparse (exact date x city)
    // ========================================================================

    /// Record a reading for an exact date; overwrites. Returns the previous value.
    pub fn insert_sparse(
        &mut self,
        date: NaiveDate,
        city: impl Into<String>,
        temperature: f64,
    ) -> Option<f64> {
        let city = city.into();
        tracing::debug!(%date, city = city.as_str(), temperature, "sparse reading stored");
        self.readings.insert(date, city, temperature)
    }

    /// Remove a dated reading. No-op (`None`) when absent.
    pub fn delete_sparse(&mut self, date: NaiveDate, city: &str) -> Option<f64> {
        let removed = self.readings.remove(&date, city);
        if removed.is_some() {
            tracing::debug!(%date, city, "sparse reading removed");
        }
        removed
    }

    pub fn try_delete_sparse(&mut self, date: NaiveDate, city: &str) -> StoreResult<f64> {
        self.delete_sparse(date, city)
            .ok_or_else(|| StoreError::not_found(format!("{date} {city}")))
    }

    pub fn retrieve_sparse(&self, date: NaiveDate, city: &str) -> Option<f64> {
        self.readings.get(&date, city).copied()
    }

    pub fn retrieve_sparse_or_sentinel(&self, date: NaiveDate, city: &str) -> f64 {
        or_sentinel(self.retrieve_sparse(date, city))
    }

    pub fn readings(&self) -> &NestedOverlay<NaiveDate, String, f64> {
        &self.readings
    }

    pub fn sparse_len(&self) -> usize {
        self.readings.len()
    }

    // ========================================================================
    // Serialization
    // ========================================================================

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        snapshot::encode(SNAPSHOT_MAGIC, SNAPSHOT_VERSION, self)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        snapshot::decode(SNAPSHOT_MAGIC, SNAPSHOT_VERSION, bytes)
    }
}
