//! JSON representation of the persisted collection.
//!
//! The collection is one JSON array of record objects. There is no version
//! field: any change to [`VolunteerRecord`]'s serialized shape breaks data
//! already written by older builds.

use crate::record::VolunteerRecord;

#[cfg(test)]
#[path = "codec_test.rs"]
mod codec_test;

/// Error returned by [`encode`] and [`decode`].
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("failed to encode volunteer log: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("failed to decode volunteer log: {0}")]
    Decode(#[source] serde_json::Error),
}

/// Serialize the whole collection to a JSON array.
///
/// # Errors
///
/// Returns [`CodecError::Encode`] if serialization fails.
pub fn encode(records: &[VolunteerRecord]) -> Result<String, CodecError> {
    serde_json::to_string(records).map_err(CodecError::Encode)
}

/// Parse a stored JSON array. A stored `null` is an empty collection.
///
/// # Errors
///
/// Returns [`CodecError::Decode`] for malformed JSON or records of the wrong shape.
pub fn decode(raw: &str) -> Result<Vec<VolunteerRecord>, CodecError> {
    let records: Option<Vec<VolunteerRecord>> = serde_json::from_str(raw).map_err(CodecError::Decode)?;
    Ok(records.unwrap_or_default())
}
