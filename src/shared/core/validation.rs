// Request validation shared by the inbound use cases.
//
// The event store does not enforce business rules; everything a caller may
// submit is checked here before it reaches a store.

use thiserror::Error;

pub const MAX_TEXT_CHARS: usize = 2000;
pub const MAX_NOTES_CHARS: usize = 500;
pub const MIN_LIST_LIMIT: usize = 1;
pub const MAX_LIST_LIMIT: usize = 200;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },

    #[error("{field} must be at most {max} characters, got {actual}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
}

/// Trims `value` and checks it holds between 1 and `max` characters.
pub fn bounded_text(field: &'static str, value: &str, max: usize) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty { field });
    }
    let actual = trimmed.chars().count();
    if actual > max {
        return Err(ValidationError::TooLong { field, max, actual });
    }
    Ok(trimmed.to_string())
}

pub fn input_text(value: &str) -> Result<String, ValidationError> {
    bounded_text("text", value, MAX_TEXT_CHARS)
}

pub fn non_empty(field: &'static str, value: &str) -> Result<String, ValidationError> {
    bounded_text(field, value, usize::MAX)
}

pub fn clamp_limit(limit: Option<i64>, default: usize) -> usize {
    match limit {
        Some(requested) => requested.clamp(MIN_LIST_LIMIT as i64, MAX_LIST_LIMIT as i64) as usize,
        None => default.clamp(MIN_LIST_LIMIT, MAX_LIST_LIMIT),
    }
}
