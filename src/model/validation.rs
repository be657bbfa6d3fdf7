//! Presence checks for bound form input.
//!
//! Validation runs at the request boundary, before anything reaches the directory.
//! A form that fails never produces a directory request, so it cannot mutate state.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single failed field check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    /// The field that failed validation, as it appears in the form.
    pub field: String,
    /// Human readable description of the failure.
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Joins errors into one line, e.g. for log output and error messages.
pub fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Records an error for `field` when `value` is absent or only whitespace.
///
/// `label` is the display name used in the message ("Name" for `name`).
pub fn required(errors: &mut Vec<FieldError>, field: &str, label: &str, value: Option<&str>) {
    if value.map_or(true, |v| v.trim().is_empty()) {
        errors.push(FieldError::new(
            field,
            format!("The {label} field is required."),
        ));
    }
}
