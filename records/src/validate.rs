//! Form-input rules that admit a [`crate::VolunteerRecord`].
//!
//! DESIGN
//! ======
//! Every rule is checked against its own field and failures accumulate, so a
//! single rejected submission reports every problem at once. The combined
//! message is what the form shows in its blocking alert.

use std::fmt;

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// The four raw form values, exactly as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RawInput {
    pub charity_name: String,
    pub hours_volunteered: String,
    pub volunteer_date: String,
    pub experience_rating: String,
}

impl RawInput {
    /// Empty every field, as a form reset does.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Trimmed and parsed form values that passed every rule.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidInput {
    pub charity_name: String,
    pub hours_volunteered: f64,
    pub volunteer_date: String,
    pub experience_rating: f64,
}

/// A single violated rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Charity name is required.")]
    MissingCharityName,
    #[error("Hours volunteered must be a positive number.")]
    InvalidHours,
    #[error("Date is required.")]
    MissingDate,
    #[error("Experience rating must be a number between 1 and 5.")]
    InvalidRating,
}

/// Every rule a submission violated, in field order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, error: ValidationError) -> bool {
        self.0.contains(&error)
    }

    /// Human-readable message: each rule's text followed by a newline.
    #[must_use]
    pub fn message(&self) -> String {
        self.0.iter().map(|e| format!("{e}\n")).collect()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message().trim_end())
    }
}

impl std::error::Error for ValidationErrors {}

pub type Validation = Result<ValidInput, ValidationErrors>;

/// Check all four inputs. Pure: no side effects beyond the returned value.
///
/// # Errors
///
/// Returns every violated rule when any input fails.
pub fn validate(input: &RawInput) -> Validation {
    let mut errors = Vec::new();

    let charity_name = input.charity_name.trim();
    if charity_name.is_empty() {
        errors.push(ValidationError::MissingCharityName);
    }

    let hours = parse_number(&input.hours_volunteered).filter(|h| *h > 0.0);
    if hours.is_none() {
        errors.push(ValidationError::InvalidHours);
    }

    let volunteer_date = input.volunteer_date.trim();
    if volunteer_date.is_empty() {
        errors.push(ValidationError::MissingDate);
    }

    let rating = parse_number(&input.experience_rating).filter(|r| (MIN_RATING..=MAX_RATING).contains(r));
    if rating.is_none() {
        errors.push(ValidationError::InvalidRating);
    }

    match (hours, rating) {
        (Some(hours_volunteered), Some(experience_rating)) if errors.is_empty() => Ok(ValidInput {
            charity_name: charity_name.to_owned(),
            hours_volunteered,
            volunteer_date: volunteer_date.to_owned(),
            experience_rating,
        }),
        _ => Err(ValidationErrors(errors)),
    }
}

/// Parse a trimmed finite number; empty, `NaN` and infinities are rejected.
fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => None,
    }
}
