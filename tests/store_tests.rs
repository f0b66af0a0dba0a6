//! Tests for Store
//!
//! These tests verify:
//! - Loading: missing file, malformed lines, replacement semantics
//! - Saving: line format, order, overwrite
//! - Mutation and reordering through the store API

use std::fs;

use recordbook::{LoadReport, Record, Store};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn record(name: &str, id: &str, major: &str, gpa: f64) -> Record {
    let mut r = Record::new(name, id, major);
    r.set_gpa(gpa).unwrap();
    r
}

fn sample_store() -> Store {
    [
        record("Citra", "30", "Law", 2.0),
        record("ana", "10", "Math", 3.5),
        record("Budi", "20", "Art", 1.0),
        record("Dewi", "40", "Physics", 4.0),
    ]
    .into_iter()
    .collect()
}

fn names(store: &Store) -> Vec<&str> {
    store.records().iter().map(|r| r.name.as_str()).collect()
}

// =============================================================================
// Load Tests
// =============================================================================

#[test]
fn test_load_missing_file_keeps_empty_store() {
    let temp = TempDir::new().unwrap();
    let mut store = Store::new();

    let report = store.load(&temp.path().join("nonexistent.path")).unwrap();

    assert_eq!(report, LoadReport::default());
    assert!(!report.file_found);
    assert!(store.is_empty());
}

#[test]
fn test_load_missing_file_keeps_existing_records() {
    let temp = TempDir::new().unwrap();
    let mut store = sample_store();

    store.load(&temp.path().join("missing.txt")).unwrap();

    assert_eq!(store.len(), 4);
}

#[test]
fn test_load_skips_malformed_line() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("records.txt");
    fs::write(&path, "Ana,123,Informatics,3.5\nBudi,456,Law\n").unwrap();

    let mut store = Store::new();
    let report = store.load(&path).unwrap();

    assert_eq!(
        report,
        LoadReport {
            file_found: true,
            loaded: 1,
            skipped: 1
        }
    );
    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0], record("Ana", "123", "Informatics", 3.5));
}

#[test]
fn test_load_skips_line_that_is_not_utf8() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("records.txt");
    let mut contents = b"Ana,1,Math,3.5\n".to_vec();
    contents.extend_from_slice(b"Jos\xe9,2,Law,3.0\n"); // Latin-1 name
    contents.extend_from_slice(b"Budi,3,Law,2.0\n");
    fs::write(&path, contents).unwrap();

    let mut store = Store::new();
    let report = store.load(&path).unwrap();

    assert_eq!(
        report,
        LoadReport {
            file_found: true,
            loaded: 2,
            skipped: 1
        }
    );
    assert_eq!(names(&store), vec!["Ana", "Budi"]);
}

#[test]
fn test_load_last_line_without_newline() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("records.txt");
    fs::write(&path, "Ana,1,Math,3.5\r\nBudi,2,Law,2.0").unwrap();

    let mut store = Store::new();
    store.load(&path).unwrap();

    assert_eq!(names(&store), vec!["Ana", "Budi"]);
    assert_eq!(store.records()[1].gpa(), 2.0);
}

#[test]
fn test_load_replaces_existing_records() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("records.txt");
    fs::write(&path, "Eka,50,Biology,3.0\n").unwrap();

    let mut store = sample_store();
    store.load(&path).unwrap();

    assert_eq!(names(&store), vec!["Eka"]);
}

#[test]
fn test_load_empty_file_clears_store() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("records.txt");
    fs::write(&path, "").unwrap();

    let mut store = sample_store();
    let report = store.load(&path).unwrap();

    assert!(report.file_found);
    assert_eq!(report.loaded, 0);
    assert!(store.is_empty());
}

#[test]
fn test_load_bad_gpa_keeps_record_with_zero() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("records.txt");
    fs::write(&path, "Ana,1,Math,seven\nBudi,2,Law,5.0\n\n").unwrap();

    let mut store = Store::new();
    let report = store.load(&path).unwrap();

    assert_eq!(report.loaded, 2);
    assert_eq!(report.skipped, 1); // the blank line
    assert!(store.records().iter().all(|r| r.gpa() == 0.0));
}

// =============================================================================
// Save Tests
// =============================================================================

#[test]
fn test_save_writes_one_line_per_record_in_order() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("records.txt");

    sample_store().save(&path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert_eq!(
        contents,
        "Citra,30,Law,2.0\nana,10,Math,3.5\nBudi,20,Art,1.0\nDewi,40,Physics,4.0\n"
    );
}

#[test]
fn test_save_overwrites_existing_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("records.txt");
    fs::write(&path, "old,1,old,1.0\nold,2,old,2.0\nold,3,old,3.0\n").unwrap();

    let store: Store = [record("New", "9", "Art", 2.5)].into_iter().collect();
    store.save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "New,9,Art,2.5\n");
}

#[test]
fn test_save_empty_store_writes_empty_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("records.txt");

    Store::new().save(&path).unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "");
}

#[test]
fn test_save_into_missing_directory_fails() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("no_such_dir").join("records.txt");

    let result = sample_store().save(&path);

    assert!(matches!(result, Err(recordbook::RecordError::Io(_))));
}

#[test]
fn test_save_then_load_restores_records() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("records.txt");
    let original = sample_store();

    original.save(&path).unwrap();
    let mut restored = Store::new();
    restored.load(&path).unwrap();

    assert_eq!(restored.records(), original.records());
}

// =============================================================================
// Mutation and Reordering Tests
// =============================================================================

#[test]
fn test_add_appends_and_allows_duplicate_ids() {
    let mut store = Store::new();
    store.add(record("Ana", "1", "Math", 3.0));
    store.add(record("Ana", "1", "Math", 3.0));
    store.add(record("Budi", "2", "Law", 2.0));

    assert_eq!(store.len(), 3);
    assert_eq!(names(&store), vec!["Ana", "Ana", "Budi"]);
}

#[test]
fn test_sort_by_name_replaces_sequence() {
    let mut store = sample_store();
    store.sort_by_name();
    assert_eq!(names(&store), vec!["ana", "Budi", "Citra", "Dewi"]);
}

#[test]
fn test_sort_by_gpa_desc() {
    let mut store = sample_store();
    store.sort_by_gpa_desc();

    let gpas: Vec<f64> = store.records().iter().map(|r| r.gpa()).collect();
    assert_eq!(gpas, vec![4.0, 3.5, 2.0, 1.0]);
}

#[test]
fn test_binary_search_leaves_store_sorted_by_id() {
    let mut store = sample_store();

    let found = store.binary_search("20").map(|r| r.name.clone());
    assert_eq!(found.as_deref(), Some("Budi"));

    let ids: Vec<&str> = store.records().iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["10", "20", "30", "40"]);
}

#[test]
fn test_binary_search_not_found_still_sorts() {
    let mut store = sample_store();

    assert!(store.binary_search("99").is_none());
    assert_eq!(store.records()[0].id, "10");
}

#[test]
fn test_linear_search_through_store() {
    let store = sample_store();
    let hits: Vec<&str> = store
        .linear_search("I")
        .iter()
        .map(|r| r.name.as_str())
        .collect();
    assert_eq!(hits, vec!["Citra", "Budi", "Dewi"]);
}
