//! Onboarding and profile field validation.
//!
//! Profile text fields are bounded here rather than in the handlers so the
//! same limits apply to the onboarding form and later profile edits.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

pub const MIN_NAME_LEN: usize = 2;
pub const MAX_NAME_LEN: usize = 50;
pub const MAX_CURRENT_ROLE_LEN: usize = 100;
pub const MAX_INTERESTS_LEN: usize = 1000;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_char_range(
    value: &str,
    min: usize,
    max: usize,
    label: &str,
) -> Result<(), CoreError> {
    let len = value.trim().chars().count();
    if len < min || len > max {
        return Err(CoreError::Validation(format!(
            "{label} must be between {min} and {max} characters"
        )));
    }
    Ok(())
}

/// First or last name: 2 to 50 characters after trimming.
pub fn validate_name(value: &str, label: &str) -> Result<(), CoreError> {
    validate_char_range(value, MIN_NAME_LEN, MAX_NAME_LEN, label)
}

pub fn validate_current_role(value: &str) -> Result<(), CoreError> {
    validate_char_range(value, 0, MAX_CURRENT_ROLE_LEN, "Current role")
}

pub fn validate_interests(value: &str) -> Result<(), CoreError> {
    validate_char_range(value, 0, MAX_INTERESTS_LEN, "Interests")
}

/// Normalize optional free text: trimmed, blank becomes `None`.
pub fn normalize_text(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Normalize an email address for storage and lookup.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
