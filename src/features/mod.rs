//! Typed clients for the backend resources. Each feature keeps its endpoint
//! paths in `client.rs` and its payloads in `types.rs`; authorization is the
//! backend's job, these helpers only reject obviously incomplete forms before
//! a request is made.

pub mod auth;
pub mod courses;
pub mod dashboard;
pub mod registrations;
pub mod results;
pub mod students;

// common functions for the feature clients
use crate::api::ApiError;
use regex::Regex;

#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").map_or(false, |re| re.is_match(email))
}

/// Fails with the given message when any of the values is blank.
pub(crate) fn require_fields(values: &[&str], message: &str) -> Result<(), ApiError> {
    if values.iter().any(|value| value.trim().is_empty()) {
        return Err(ApiError::Validation(message.to_string()));
    }
    Ok(())
}

pub(crate) fn require_email(email: &str) -> Result<(), ApiError> {
    if valid_email(email.trim()) {
        Ok(())
    } else {
        Err(ApiError::Validation(format!(
            "{} is not a valid email address.",
            email.trim()
        )))
    }
}
