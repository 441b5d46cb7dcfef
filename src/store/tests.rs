use super::*;
use crate::error::{QError, QrnError};
use crate::test_utils::FakeSource;
use tempfile::TempDir;

fn open_temp() -> (TempDir, Store) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path()).unwrap();
    (dir, store)
}

#[test]
fn test_open_fresh_dir_writes_defaults() {
    let (dir, store) = open_temp();
    assert_eq!(store.size(), 0);
    assert_eq!(store.min_store_size(), DEFAULT_MIN_STORE_SIZE);
    assert_eq!(store.target_store_size(), DEFAULT_TARGET_STORE_SIZE);
    assert!(dir.path().join(SETTINGS_FILE_NAME).exists());
    assert_eq!(store.store_file(), dir.path().join(STORE_FILE_NAME));
}

#[test]
fn test_open_creates_missing_dir() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let store = Store::open(&nested).unwrap();
    assert_eq!(store.size(), 0);
    assert!(nested.is_dir());
}

#[test]
fn test_open_malformed_settings() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(SETTINGS_FILE_NAME), "{ not json").unwrap();
    let err = Store::open(dir.path()).unwrap_err();
    assert!(matches!(
        err,
        QrnError::Q(QError::ParseSettingsError(_))
    ));
}

#[test]
fn test_add_persists_across_reopen() {
    let (dir, mut store) = open_temp();
    let source = FakeSource::new();
    store.add_to_store(&source, 5).unwrap();
    assert_eq!(store.bytes(), &[0, 1, 2, 3, 4]);

    let reopened = Store::open(dir.path()).unwrap();
    assert_eq!(reopened.bytes(), &[0, 1, 2, 3, 4]);
}

#[test]
fn test_fill_to_target() {
    let (_dir, mut store) = open_temp();
    let source = FakeSource::new();
    store.set_target_store_size(10).unwrap();
    store.add_to_store(&source, 4).unwrap();
    store.fill(&source).unwrap();
    assert_eq!(store.size(), 10);
    assert_eq!(*source.requests.borrow(), vec![4, 6]);

    // Already full: no request.
    store.fill(&source).unwrap();
    assert_eq!(source.requests.borrow().len(), 2);
}

#[test]
fn test_failed_fetch_leaves_store_untouched() {
    let (_dir, mut store) = open_temp();
    store.add_to_store(&FakeSource::new(), 3).unwrap();
    let failing = FakeSource::failing("garbage");
    assert!(store.add_to_store(&failing, 5).is_err());
    assert!(store.observe(&failing, 10).is_err());
    assert_eq!(store.bytes(), &[0, 1, 2]);
}

#[test]
fn test_observe_removes_from_front() {
    let (_dir, mut store) = open_temp();
    let source = FakeSource::new();
    store.set_min_store_size(0).unwrap();
    store.add_to_store(&source, 6).unwrap();

    let observed = store.observe(&source, 4).unwrap();
    assert_eq!(observed, vec![0, 1, 2, 3]);
    assert_eq!(store.bytes(), &[4, 5]);
}

#[test]
fn test_observe_fetches_shortfall() {
    let (_dir, mut store) = open_temp();
    let source = FakeSource::new();
    store.set_min_store_size(0).unwrap();
    store.add_to_store(&source, 2).unwrap();

    let observed = store.observe(&source, 5).unwrap();
    assert_eq!(observed, vec![0, 1, 2, 3, 4]);
    assert_eq!(store.size(), 0);
}

#[test]
fn test_observe_refills_below_minimum() {
    let (_dir, mut store) = open_temp();
    let source = FakeSource::new();
    store.set_min_store_size(5).unwrap();
    store.set_target_store_size(8).unwrap();
    store.add_to_store(&source, 8).unwrap();

    let observed = store.observe(&source, 4).unwrap();
    assert_eq!(observed.len(), 4);
    // 4 left, below 5: refilled to 8 in a single request.
    assert_eq!(store.size(), 8);
    assert_eq!(*source.requests.borrow(), vec![8, 4]);
}

#[test]
fn test_peek_does_not_remove() {
    let (_dir, mut store) = open_temp();
    store.add_to_store(&FakeSource::new(), 3).unwrap();
    assert_eq!(store.peek(2), &[0, 1]);
    assert_eq!(store.peek(10), &[0, 1, 2]);
    assert_eq!(store.peek_all(), &[0, 1, 2]);
    assert_eq!(store.size(), 3);
}

#[test]
fn test_settings_persist() {
    let (dir, mut store) = open_temp();
    store.set_min_store_size(100).unwrap();
    store.set_target_store_size(500).unwrap();

    let reopened = Store::open(dir.path()).unwrap();
    assert_eq!(
        reopened.settings(),
        StoreSettings {
            min_store_size: 100,
            target_store_size: 500
        }
    );
}

#[test]
fn test_restore_defaults() {
    let (_dir, mut store) = open_temp();
    store.set_min_store_size(1).unwrap();
    store.restore_defaults().unwrap();
    assert_eq!(store.settings(), StoreSettings::default());
}

#[test]
fn test_reinitialize_replaces_bytes() {
    let (_dir, mut store) = open_temp();
    let source = FakeSource::new();
    store.add_to_store(&source, 3).unwrap();
    store.set_target_store_size(5).unwrap();

    store.reinitialize(&source).unwrap();
    assert_eq!(store.settings(), StoreSettings::default());
    assert_eq!(store.size(), DEFAULT_TARGET_STORE_SIZE);
    assert_eq!(store.bytes()[0], 3);
}

#[test]
fn test_observe_huge_count_is_an_error() {
    let (_dir, mut store) = open_temp();
    let source = FakeSource::new();

    // Empty store: shortfall plus refill would overflow.
    let err = store.observe(&source, usize::MAX).unwrap_err();
    assert!(matches!(
        err,
        QrnError::RequestTooLarge { requested: usize::MAX, .. }
    ));

    store.add_to_store(&source, 3).unwrap();
    let err = store.observe(&source, usize::MAX - 1).unwrap_err();
    assert!(matches!(err, QrnError::RequestTooLarge { .. }));
    assert_eq!(store.bytes(), &[0, 1, 2]);
}

#[test]
fn test_add_huge_count_is_an_error() {
    let (_dir, mut store) = open_temp();
    let err = store.add_to_store(&FakeSource::new(), usize::MAX).unwrap_err();
    assert!(matches!(err, QrnError::RequestTooLarge { .. }));
    assert_eq!(store.size(), 0);
}

#[test]
fn test_settings_are_read_only_at_open() {
    let (dir, mut store) = open_temp();
    let settings_file = dir.path().join(SETTINGS_FILE_NAME);
    std::fs::write(&settings_file, "garbage").unwrap();

    // Operations use the copy loaded at open.
    store.set_target_store_size(4).unwrap();
    store.fill(&FakeSource::new()).unwrap();
    assert_eq!(store.size(), 4);

    // The next settings change rewrote the file.
    let reopened = Store::open(dir.path()).unwrap();
    assert_eq!(reopened.target_store_size(), 4);
}
