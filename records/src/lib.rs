//! Volunteer record model, validation, and `localStorage`-style persistence.
//!
//! This crate owns everything about a volunteer log that does not need a
//! browser: the record shape, the form-input rules that admit a record, the
//! JSON representation of the persisted collection, and the read-modify-write
//! store that keeps that collection under a single key. The `volunteer-log`
//! client plugs a browser `Storage` implementation into [`RecordStore`].

pub mod codec;
pub mod record;
pub mod storage;
pub mod store;
pub mod validate;

pub use codec::CodecError;
pub use record::VolunteerRecord;
pub use storage::{MemoryStorage, Storage, StorageError};
pub use store::{DEFAULT_STORAGE_KEY, RecordStore, StoreConfig, StoreError};
pub use validate::{RawInput, ValidInput, Validation, ValidationError, ValidationErrors, validate};
