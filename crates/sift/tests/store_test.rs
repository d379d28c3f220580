mod common;

use common::{write_tsv, FakePicker};
use sift_lib::{AcquireMode, Acquired, DatasetStore, SiftError};

fn expect_dataset(acquired: Acquired) -> sift_lib::Dataset {
    match acquired {
        Acquired::Dataset(dataset) => dataset,
        other => panic!("expected a dataset, got {:?}", other),
    }
}

#[test]
fn test_import_writes_cache_and_round_trips() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = write_tsv(
        temp_dir.path(),
        "source.tsv",
        &["text", "link_accessibility"],
        &[
            &["first row about spectra", "ok"],
            &["second row about cats", "broken"],
        ],
    );
    let cache = temp_dir.path().join("db/database.tsv");
    let store = DatasetStore::new(&cache);

    let picker = FakePicker::returning(source);
    let imported = expect_dataset(store.acquire(AcquireMode::Import, &picker).unwrap());
    assert_eq!(imported.len(), 2);
    assert!(cache.exists());

    let reused =
        expect_dataset(store.acquire(AcquireMode::Reuse, &FakePicker::cancelled()).unwrap());
    assert_eq!(reused.len(), 2);
    assert_eq!(reused.text(0), Some("first row about spectra"));
    assert_eq!(reused.text(1), Some("second row about cats"));
}

#[test]
fn test_extra_columns_survive_the_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = write_tsv(
        temp_dir.path(),
        "source.tsv",
        &["id", "text", "link_accessibility"],
        &[&["7", "kept verbatim", "ok"]],
    );
    let cache = temp_dir.path().join("database.tsv");
    let store = DatasetStore::new(&cache);

    let picker = FakePicker::returning(source);
    expect_dataset(store.acquire(AcquireMode::Import, &picker).unwrap());

    let reused =
        expect_dataset(store.acquire(AcquireMode::Reuse, &FakePicker::cancelled()).unwrap());
    assert_eq!(
        reused.headers(),
        &["id".to_string(), "text".to_string(), "link_accessibility".to_string()]
    );
    assert_eq!(reused.rows()[0][0], "7");
    assert_eq!(reused.text(0), Some("kept verbatim"));
}

#[test]
fn test_reuse_without_cache_reports_no_cache() {
    let temp_dir = tempfile::tempdir().unwrap();
    let store = DatasetStore::new(temp_dir.path().join("database.tsv"));

    let acquired = store
        .acquire(AcquireMode::Reuse, &FakePicker::cancelled())
        .unwrap();
    assert!(matches!(acquired, Acquired::NoCache));
}

#[test]
fn test_cancelled_import_writes_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let cache = temp_dir.path().join("database.tsv");
    let store = DatasetStore::new(&cache);

    let acquired = store
        .acquire(AcquireMode::Import, &FakePicker::cancelled())
        .unwrap();
    assert!(matches!(acquired, Acquired::Cancelled));
    assert!(!cache.exists());
}

#[test]
fn test_import_rejects_missing_required_column() {
    let temp_dir = tempfile::tempdir().unwrap();
    let source = write_tsv(
        temp_dir.path(),
        "source.tsv",
        &["text", "other"],
        &[&["row", "x"]],
    );
    let cache = temp_dir.path().join("database.tsv");
    let store = DatasetStore::new(&cache);

    let result = store.acquire(AcquireMode::Import, &FakePicker::returning(source));
    assert!(matches!(
        result,
        Err(SiftError::MissingColumn("link_accessibility"))
    ));
    // Nothing is cached on validation failure.
    assert!(!cache.exists());
}

#[test]
fn test_import_overwrites_existing_cache() {
    let temp_dir = tempfile::tempdir().unwrap();
    let cache = temp_dir.path().join("database.tsv");
    let store = DatasetStore::new(&cache);

    let first = write_tsv(
        temp_dir.path(),
        "first.tsv",
        &["text", "link_accessibility"],
        &[&["old row", "ok"]],
    );
    expect_dataset(
        store
            .acquire(AcquireMode::Import, &FakePicker::returning(first))
            .unwrap(),
    );

    let second = write_tsv(
        temp_dir.path(),
        "second.tsv",
        &["text", "link_accessibility"],
        &[&["new row", "ok"], &["another", "ok"]],
    );
    expect_dataset(
        store
            .acquire(AcquireMode::Import, &FakePicker::returning(second))
            .unwrap(),
    );

    let reused =
        expect_dataset(store.acquire(AcquireMode::Reuse, &FakePicker::cancelled()).unwrap());
    assert_eq!(reused.len(), 2);
    assert_eq!(reused.text(0), Some("new row"));
}
