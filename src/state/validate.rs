//! Form input validation shared by both panels.
//!
//! Rules mirror the backend (names are required and capped at 63
//! characters), so obviously bad input never leaves the browser.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use thiserror::Error;

pub const NAME_MAX_LEN: usize = 63;

/// Display text is shown to the user as the transaction result message.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("{0} is required")]
    Missing(&'static str),
    #[error("{0} must be at most {max} characters", max = NAME_MAX_LEN)]
    TooLong(&'static str),
    #[error("{0} must be a whole number")]
    NotAnInteger(&'static str),
}

/// Trim a name and check it against the backend limits.
///
/// # Errors
///
/// Returns `Missing` for blank input and `TooLong` past `NAME_MAX_LEN`.
pub fn name(field: &'static str, raw: &str) -> Result<String, InputError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(InputError::Missing(field));
    }
    if value.chars().count() > NAME_MAX_LEN {
        return Err(InputError::TooLong(field));
    }
    Ok(value.to_owned())
}

/// Parse an integer id typed into a text input.
///
/// # Errors
///
/// Returns `Missing` for blank input and `NotAnInteger` otherwise.
pub fn integer(field: &'static str, raw: &str) -> Result<i64, InputError> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(InputError::Missing(field));
    }
    value.parse().map_err(|_| InputError::NotAnInteger(field))
}
