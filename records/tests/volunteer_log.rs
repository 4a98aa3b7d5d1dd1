//! End-to-end store behaviour over in-memory storage.

use records::{MemoryStorage, RawInput, RecordStore, Storage, VolunteerRecord, validate};

fn submit(store: &RecordStore<&MemoryStorage>, name: &str, hours: &str, date: &str, rating: &str) -> bool {
    let raw = RawInput {
        charity_name: name.to_owned(),
        hours_volunteered: hours.to_owned(),
        volunteer_date: date.to_owned(),
        experience_rating: rating.to_owned(),
    };
    match validate(&raw) {
        Ok(valid) => {
            store.append(VolunteerRecord::from_validated(&valid)).unwrap();
            true
        }
        Err(_) => false,
    }
}

#[test]
fn two_submissions_then_delete_first() {
    let storage = MemoryStorage::new();
    let store = RecordStore::with_default_key(&storage);

    assert!(submit(&store, "Red Cross", "8", "2024-12-06", "5"));
    assert!(submit(&store, "Food Bank", "4", "2024-12-07", "3"));
    assert_eq!(store.total_hours(), 12.0);

    let first = store.load()[0].clone();
    store.remove(&first).unwrap();

    assert_eq!(store.total_hours(), 4.0);
    assert_eq!(store.load().len(), 1);
    assert_eq!(store.load()[0].charity_name, "Food Bank");
}

#[test]
fn rejected_submission_leaves_storage_untouched() {
    let storage = MemoryStorage::new();
    let store = RecordStore::with_default_key(&storage);

    assert!(!submit(&store, "", "3", "2024-01-01", "2"));

    assert_eq!(store.total_hours(), 0.0);
    assert!(store.load().is_empty());
    assert_eq!(storage.get_item("volunteerLogs").unwrap(), None);
}

#[test]
fn data_survives_a_new_store_over_the_same_storage() {
    let storage = MemoryStorage::new();
    {
        let store = RecordStore::with_default_key(&storage);
        assert!(submit(&store, "Shelter", "2.5", "2024-03-01", "4"));
    }
    let reopened = RecordStore::with_default_key(&storage);
    assert_eq!(reopened.total_hours(), 2.5);
    assert_eq!(reopened.load()[0].volunteer_date, "2024-03-01");
}
