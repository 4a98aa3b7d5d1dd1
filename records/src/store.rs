//! Record store: read-modify-write access to the persisted collection.
//!
//! DESIGN
//! ======
//! The whole collection lives under one storage key and every operation
//! re-reads it, mutates the in-memory copy, and writes it back wholesale.
//! Callers run on a single event-dispatch thread, so each cycle completes
//! before the next begins and no locking is needed.
//!
//! TRADE-OFFS
//! ==========
//! Rewriting the full array on each mutation is linear in log size. A stored
//! value that cannot be read or decoded is treated as an empty log; the next
//! successful write replaces it.

use crate::codec::{self, CodecError};
use crate::record::{self, VolunteerRecord};
use crate::storage::{Storage, StorageError};

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

/// Storage key used when none is configured.
pub const DEFAULT_STORAGE_KEY: &str = "volunteerLogs";

/// Where the store keeps its collection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    pub storage_key: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { storage_key: DEFAULT_STORAGE_KEY.to_owned() }
    }
}

/// Error returned by mutating store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Persistence for the volunteer log over any [`Storage`].
#[derive(Debug)]
pub struct RecordStore<S> {
    storage: S,
    config: StoreConfig,
}

impl<S: Storage> RecordStore<S> {
    pub fn new(storage: S, config: StoreConfig) -> Self {
        Self { storage, config }
    }

    pub fn with_default_key(storage: S) -> Self {
        Self::new(storage, StoreConfig::default())
    }

    #[must_use]
    pub fn storage_key(&self) -> &str {
        &self.config.storage_key
    }

    /// Read the stored collection. Absent, unreadable, or undecodable data
    /// yields an empty collection.
    #[must_use]
    pub fn load(&self) -> Vec<VolunteerRecord> {
        let key = self.storage_key();
        let raw = match self.storage.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                log::warn!("volunteer log read failed: key={key} error={e}");
                return Vec::new();
            }
        };
        match codec::decode(&raw) {
            Ok(records) => records,
            Err(e) => {
                log::warn!("volunteer log treated as empty: key={key} error={e}");
                Vec::new()
            }
        }
    }

    /// Append `record` to the end of the stored collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the updated collection cannot be written.
    pub fn append(&self, record: VolunteerRecord) -> Result<(), StoreError> {
        let mut records = self.load();
        records.push(record);
        self.write(&records)
    }

    /// Remove every stored entry structurally equal to `record`.
    ///
    /// Returns how many entries were removed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the filtered collection cannot be written.
    pub fn remove(&self, record: &VolunteerRecord) -> Result<usize, StoreError> {
        let mut records = self.load();
        let before = records.len();
        records.retain(|r| r != record);
        let removed = before - records.len();
        self.write(&records)?;
        Ok(removed)
    }

    /// Sum of `hours_volunteered` over the stored collection.
    #[must_use]
    pub fn total_hours(&self) -> f64 {
        record::sum_hours(&self.load())
    }

    fn write(&self, records: &[VolunteerRecord]) -> Result<(), StoreError> {
        let raw = codec::encode(records)?;
        self.storage.set_item(self.storage_key(), &raw)?;
        log::debug!("volunteer log written: key={} entries={}", self.storage_key(), records.len());
        Ok(())
    }
}
