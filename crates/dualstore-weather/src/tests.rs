//! Weather store behaviour tests

use super::*;
use approx::assert_relative_eq;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}

#[test]
fn test_new_grid_is_all_absent() {
    let store = WeatherStore::new(["2023", "2024", "2025"], ["Delhi", "Mumbai", "Chennai"]);
    assert_eq!(store.shape(), (3, 3));
    assert_eq!(store.dense_filled(), 0);
    assert!(store.row_major().iter().all(Option::is_none));
    assert_eq!(store.row_major_or_sentinel(), vec![SENTINEL; 9]);
}

#[test]
fn test_dense_insert_and_retrieve_scenario() {
    let mut store = WeatherStore::default();
    assert!(store.insert_dense("2024", "Delhi", 32.5));

    assert_eq!(store.retrieve_dense("2024", "Delhi"), Some(32.5));
    assert_eq!(store.retrieve_dense("2023", "Delhi"), None);
    assert_relative_eq!(store.retrieve_dense_or_sentinel("2024", "Delhi"), 32.5);
    assert_relative_eq!(store.retrieve_dense_or_sentinel("2023", "Delhi"), -9999.0);
}

#[test]
fn test_dense_insert_overwrites() {
    let mut store = WeatherStore::default();
    store.insert_dense("2025", "Mumbai", 30.2);
    store.insert_dense("2025", "Mumbai", 31.0);
    assert_eq!(store.retrieve_dense("2025", "Mumbai"), Some(31.0));
    assert_eq!(store.dense_filled(), 1);
}

#[test]
fn test_dense_unknown_labels_are_ignored() {
    let mut store = WeatherStore::default();
    assert!(!store.insert_dense("1999", "Delhi", 1.0));
    assert!(!store.insert_dense("2024", "Pune", 1.0));
    assert!(!store.delete_dense("2024", "Pune"));
    assert_eq!(store.dense_filled(), 0);
    assert_eq!(store.retrieve_dense("1999", "Delhi"), None);
    assert_relative_eq!(store.retrieve_dense_or_sentinel("2024", "Pune"), SENTINEL);
}

#[test]
fn test_try_insert_dense_names_unknown_label() {
    let mut store = WeatherStore::default();
    assert_eq!(
        store.try_insert_dense("1999", "Delhi", 1.0),
        Err(StoreError::unknown_label("row", "1999"))
    );
    assert_eq!(store.try_insert_dense("2023", "Delhi", 1.0), Ok(None));
    assert_eq!(store.try_insert_dense("2023", "Delhi", 2.0), Ok(Some(1.0)));
}

#[test]
fn test_dense_delete_resets_cell_and_keeps_shape() {
    let mut store = WeatherStore::default();
    store.insert_dense("2023", "Chennai", 33.1);
    assert!(store.delete_dense("2023", "Chennai"));
    assert_eq!(store.retrieve_dense("2023", "Chennai"), None);
    assert_eq!(store.shape(), (3, 3));
    assert_eq!(store.row_major().len(), 9);
}

#[test]
fn test_traversal_index_identity() {
    let mut store = WeatherStore::default();
    store.insert_dense("2024", "Delhi", 32.5);
    store.insert_dense("2025", "Mumbai", 30.2);
    store.insert_dense("2023", "Chennai", 33.1);

    let (rows, cols) = store.shape();
    let rm = store.row_major();
    let cm = store.column_major();
    for r in 0..rows {
        for c in 0..cols {
            assert_eq!(cm[c * rows + r], rm[r * cols + c]);
        }
    }
    assert_eq!(rm[3], Some(32.5));
    assert_eq!(cm[1], Some(32.5));
}

#[test]
fn test_sparse_insert_retrieve_delete() {
    let mut store = WeatherStore::default();
    let d = date(2025, 7, 15);

    assert_eq!(store.insert_sparse(d, "Delhi", 34.7), None);
    assert_eq!(store.retrieve_sparse(d, "Delhi"), Some(34.7));
    assert_eq!(store.insert_sparse(d, "Delhi", 35.0), Some(34.7));
    assert_eq!(store.sparse_len(), 1);

    assert_eq!(store.retrieve_sparse(d, "Mumbai"), None);
    assert_eq!(store.retrieve_sparse(date(2025, 7, 16), "Delhi"), None);
    assert_relative_eq!(store.retrieve_sparse_or_sentinel(d, "Mumbai"), SENTINEL);

    assert_eq!(store.delete_sparse(d, "Delhi"), Some(35.0));
    assert_eq!(store.delete_sparse(d, "Delhi"), None);
    assert_eq!(
        store.try_delete_sparse(d, "Delhi"),
        Err(StoreError::not_found("2025-07-15 Delhi"))
    );
    assert_eq!(store.sparse_len(), 0);
}

#[test]
fn test_sparse_and_dense_are_independent() {
    let mut store = WeatherStore::default();
    store.insert_dense("2025", "Delhi", 30.0);
    let dense_before = store.row_major();

    store.insert_sparse(date(2025, 7, 15), "Delhi", 34.7);
    store.insert_sparse(date(2024, 1, 1), "Chennai", 22.0);
    assert_eq!(store.row_major(), dense_before);
    assert_eq!(store.retrieve_dense("2024", "Chennai"), None);

    store.delete_dense("2025", "Delhi");
    store.insert_dense("2024", "Chennai", 25.0);
    assert_eq!(store.retrieve_sparse(date(2025, 7, 15), "Delhi"), Some(34.7));
    assert_eq!(store.retrieve_sparse(date(2024, 1, 1), "Chennai"), Some(22.0));
    assert_eq!(store.sparse_len(), 2);
}

#[test]
fn test_sparse_accepts_cities_off_the_grid() {
    let mut store = WeatherStore::default();
    store.insert_sparse(date(2020, 2, 29), "Pune", 28.4);
    assert_eq!(store.retrieve_sparse(date(2020, 2, 29), "Pune"), Some(28.4));
    assert_eq!(store.dense_filled(), 0);
}

#[test]
fn test_from_config_uses_axis_labels() {
    let cfg = WeatherConfig {
        years: vec!["2030".into()],
        cities: vec!["Oslo".into(), "Lima".into()],
    };
    let store = WeatherStore::from_config(&cfg);
    assert_eq!(store.years(), &["2030".to_string()]);
    assert_eq!(store.cities(), &["Oslo".to_string(), "Lima".to_string()]);
    assert_eq!(store.shape(), (1, 2));
}

#[test]
fn test_snapshot_roundtrip() {
    let mut store = WeatherStore::default();
    store.insert_dense("2024", "Delhi", 32.5);
    store.insert_sparse(date(2025, 7, 15), "Delhi", 34.7);

    let bytes = store.to_bytes().unwrap();
    let restored = WeatherStore::from_bytes(&bytes).unwrap();
    assert_eq!(restored, store);
    assert_eq!(restored.retrieve_dense("2024", "Delhi"), Some(32.5));
    assert_eq!(restored.retrieve_sparse(date(2025, 7, 15), "Delhi"), Some(34.7));
}

#[test]
fn test_from_bytes_rejects_inventory_magic() {
    let mut bytes = WeatherStore::default().to_bytes().unwrap();
    bytes[0..4].copy_from_slice(b"DSIV");
    assert!(WeatherStore::from_bytes(&bytes).is_err());
}

#[test]
fn test_from_bytes_rejects_inconsistent_dense_shape() {
    let years = vec!["2023", "2024", "2025"];
    let cities = vec!["Delhi", "Mumbai", "Chennai"];
    // Wire layout: (years, cities, (cells, rows, width)), then the readings map.
    let no_readings = Vec::<u8>::new();

    let empty_cells = (
        (years.clone(), cities.clone(), (Vec::<Option<f64>>::new(), 3usize, 3usize)),
        no_readings.clone(),
    );
    let bytes = snapshot::encode(SNAPSHOT_MAGIC, SNAPSHOT_VERSION, &empty_cells).unwrap();
    assert!(WeatherStore::from_bytes(&bytes).is_err());

    let small_matrix = (
        (years, cities, (vec![None::<f64>; 4], 2usize, 2usize)),
        no_readings,
    );
    let bytes = snapshot::encode(SNAPSHOT_MAGIC, SNAPSHOT_VERSION, &small_matrix).unwrap();
    assert!(WeatherStore::from_bytes(&bytes).is_err());
}

#[test]
fn test_complexity_report_is_static() {
    let text = WeatherStore::complexity().to_string();
    assert!(text.contains("Retrieve: O(1) for both dense and sparse storage\n"));
    assert_eq!(
        WEATHER_COMPLEXITY.cost_of("Space (dense matrix)"),
        Some("O(years * cities)")
    );
}
