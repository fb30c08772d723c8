//! Field validation for employee create/update payloads.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{EmployeeInput, EmployeePayload};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Why a payload was rejected. Rules are checked in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name, email, and position are required")]
    MissingFields,

    #[error("Name, email, and position cannot be empty")]
    EmptyFields,

    #[error("Invalid email format")]
    InvalidEmail,
}

/// Check a payload and turn it into a writable [`EmployeeInput`].
///
/// Name and position are stored trimmed. The email pattern rejects any
/// whitespace, so a passing email is stored exactly as given.
pub fn validate_employee(payload: EmployeePayload) -> Result<EmployeeInput, ValidationError> {
    let (Some(name), Some(email), Some(position)) =
        (payload.name, payload.email, payload.position)
    else {
        return Err(ValidationError::MissingFields);
    };

    let (name, position) = (name.trim(), position.trim());
    if name.is_empty() || email.trim().is_empty() || position.is_empty() {
        return Err(ValidationError::EmptyFields);
    }

    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(EmployeeInput {
        name: name.to_string(),
        email,
        position: position.to_string(),
    })
}

/// `local@domain.tld`: one `@`, at least one `.` after it, no whitespace.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}
