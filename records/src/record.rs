//! The single record type kept in a volunteer log.

use serde::{Deserialize, Serialize};

use crate::validate::ValidInput;

#[cfg(test)]
#[path = "record_test.rs"]
mod record_test;

/// One validated volunteer-activity entry.
///
/// Records carry no identifier. Two records are the same record when all four
/// fields are equal, which is what deletion matches on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VolunteerRecord {
    pub charity_name: String,
    pub hours_volunteered: f64,
    pub volunteer_date: String,
    pub experience_rating: f64,
}

impl VolunteerRecord {
    /// Build a record from inputs that already passed [`crate::validate`].
    #[must_use]
    pub fn from_validated(input: &ValidInput) -> Self {
        Self {
            charity_name: input.charity_name.clone(),
            hours_volunteered: input.hours_volunteered,
            volunteer_date: input.volunteer_date.clone(),
            experience_rating: input.experience_rating,
        }
    }
}

/// Sum of `hours_volunteered` across `records`; `0.0` when empty.
#[must_use]
pub fn sum_hours(records: &[VolunteerRecord]) -> f64 {
    records.iter().map(|r| r.hours_volunteered).sum()
}
