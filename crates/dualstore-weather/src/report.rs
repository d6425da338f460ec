//! Line-oriented renderings of weather query results.
//!
//! Absent cells print as the numeric sentinel (`-9999`), which keeps the dense
//! traversal lines the same length as the grid.

use chrono::NaiveDate;
use dualstore_core::join_values;

use crate::WeatherStore;

/// Dates print as `day/month/year` without padding (`15/7/2025`).
pub fn format_date(date: NaiveDate) -> String {
    date.format("%-d/%-m/%Y").to_string()
}

pub fn dense_line(store: &WeatherStore, year: &str, city: &str) -> String {
    format!(
        "Retrieved (Dense) {year} {city}: {}",
        store.retrieve_dense_or_sentinel(year, city)
    )
}

pub fn sparse_line(store: &WeatherStore, date: NaiveDate, city: &str) -> String {
    format!(
        "Retrieved (Sparse) {} {city}: {}",
        format_date(date),
        store.retrieve_sparse_or_sentinel(date, city)
    )
}

pub fn row_major_line(store: &WeatherStore) -> String {
    format!("Row-major data: {}", join_values(store.row_major_or_sentinel()))
}

pub fn column_major_line(store: &WeatherStore) -> String {
    format!(
        "Column-major data: {}",
        join_values(store.column_major_or_sentinel())
    )
}

/// Dated readings, one per line, by date then city.
pub fn readings_report(store: &WeatherStore) -> String {
    store
        .readings()
        .sorted_entries()
        .into_iter()
        .map(|(date, city, t)| format!("{} {city}: {t}\n", format_date(*date)))
        .collect()
}
