use super::*;
use crate::storage::MemoryStorage;

fn record(name: &str, hours: f64, date: &str, rating: f64) -> VolunteerRecord {
    VolunteerRecord {
        charity_name: name.to_owned(),
        hours_volunteered: hours,
        volunteer_date: date.to_owned(),
        experience_rating: rating,
    }
}

/// Storage whose reads and writes always fail.
struct BrokenStorage;

impl Storage for BrokenStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Read("denied".into()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Write("quota exceeded".into()))
    }
}

// =============================================================
// load
// =============================================================

#[test]
fn load_absent_key_is_empty() {
    let store = RecordStore::with_default_key(MemoryStorage::new());
    assert!(store.load().is_empty());
}

#[test]
fn load_corrupt_value_is_empty() {
    let storage = MemoryStorage::new();
    storage.set_item(DEFAULT_STORAGE_KEY, "{not json").unwrap();
    let store = RecordStore::with_default_key(storage);
    assert!(store.load().is_empty());
    assert_eq!(store.total_hours(), 0.0);
}

#[test]
fn load_read_failure_is_empty() {
    let store = RecordStore::with_default_key(BrokenStorage);
    assert!(store.load().is_empty());
}

#[test]
fn default_config_uses_volunteer_logs_key() {
    assert_eq!(StoreConfig::default().storage_key, "volunteerLogs");
}

// =============================================================
// append
// =============================================================

#[test]
fn append_adds_to_end_in_order() {
    let store = RecordStore::with_default_key(MemoryStorage::new());
    store.append(record("Red Cross", 8.0, "2024-12-06", 5.0)).unwrap();
    store.append(record("Food Bank", 4.0, "2024-12-07", 3.0)).unwrap();

    let loaded = store.load();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].charity_name, "Red Cross");
    assert_eq!(loaded[1].charity_name, "Food Bank");
}

#[test]
fn append_writes_under_configured_key() {
    let storage = MemoryStorage::new();
    let store = RecordStore::new(&storage, StoreConfig { storage_key: "custom".into() });
    store.append(record("A", 1.0, "d", 1.0)).unwrap();

    assert_eq!(storage.get_item(DEFAULT_STORAGE_KEY).unwrap(), None);
    let raw = storage.get_item("custom").unwrap().unwrap();
    assert!(raw.starts_with("[{\"charityName\":\"A\""));
}

#[test]
fn append_over_corrupt_value_replaces_it() {
    let storage = MemoryStorage::new();
    storage.set_item(DEFAULT_STORAGE_KEY, "garbage").unwrap();
    let store = RecordStore::with_default_key(&storage);
    store.append(record("A", 2.0, "d", 2.0)).unwrap();
    assert_eq!(store.load(), vec![record("A", 2.0, "d", 2.0)]);
}

#[test]
fn append_reports_write_failure() {
    let store = RecordStore::with_default_key(BrokenStorage);
    let err = store.append(record("A", 1.0, "d", 1.0)).unwrap_err();
    assert!(matches!(err, StoreError::Storage(StorageError::Write(_))));
}

// =============================================================
// remove
// =============================================================

#[test]
fn remove_drops_every_structural_match_only() {
    let store = RecordStore::with_default_key(MemoryStorage::new());
    let target = record("Red Cross", 8.0, "2024-12-06", 5.0);
    let near = record("Red Cross", 8.0, "2024-12-06", 4.0);
    let other = record("Food Bank", 4.0, "2024-12-07", 3.0);
    for r in [target.clone(), other.clone(), target.clone(), near.clone(), other.clone()] {
        store.append(r).unwrap();
    }

    let removed = store.remove(&target).unwrap();

    assert_eq!(removed, 2);
    assert_eq!(store.load(), vec![other.clone(), near, other]);
}

#[test]
fn remove_missing_record_leaves_collection() {
    let store = RecordStore::with_default_key(MemoryStorage::new());
    store.append(record("A", 1.0, "d", 1.0)).unwrap();
    assert_eq!(store.remove(&record("B", 1.0, "d", 1.0)).unwrap(), 0);
    assert_eq!(store.load().len(), 1);
}

// =============================================================
// total_hours
// =============================================================

#[test]
fn total_hours_empty_is_zero() {
    let store = RecordStore::with_default_key(MemoryStorage::new());
    assert_eq!(store.total_hours(), 0.0);
}

#[test]
fn total_hours_sums_entries() {
    let store = RecordStore::with_default_key(MemoryStorage::new());
    store.append(record("A", 8.0, "d", 5.0)).unwrap();
    store.append(record("B", 4.5, "d", 3.0)).unwrap();
    assert_eq!(store.total_hours(), 12.5);
}

#[test]
fn append_preserves_browser_written_entries_with_fractional_ratings() {
    let storage = MemoryStorage::new();
    let legacy = r#"[{"charityName":"Red Cross","hoursVolunteered":8,"volunteerDate":"2024-12-06","experienceRating":5},{"charityName":"Food Bank","hoursVolunteered":2,"volunteerDate":"2024-12-07","experienceRating":3.5}]"#;
    storage.set_item(DEFAULT_STORAGE_KEY, legacy).unwrap();
    let store = RecordStore::with_default_key(&storage);
    assert_eq!(store.load().len(), 2);

    store.append(record("New", 1.0, "2024-12-08", 2.5)).unwrap();

    let loaded = store.load();
    let names: Vec<_> = loaded.iter().map(|r| r.charity_name.as_str()).collect();
    assert_eq!(names, ["Red Cross", "Food Bank", "New"]);
    assert_eq!(loaded[1].experience_rating, 3.5);
    assert_eq!(store.total_hours(), 11.0);
}
