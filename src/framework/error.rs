//! # Framework Errors
//!
//! Errors raised by the directory and by the actor plumbing around it.

use std::fmt::{Debug, Display};

/// Errors returned by [`Directory`](crate::framework::Directory) operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DirectoryError<Id: Display + Debug> {
    #[error("Item not found: {0}")]
    NotFound(Id),
    /// No id is left above the current maximum.
    #[error("No id left after {0}")]
    IdsExhausted(Id),
}

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("No id left after {0}")]
    IdsExhausted(String),
}

impl<Id: Display + Debug> From<DirectoryError<Id>> for FrameworkError {
    fn from(e: DirectoryError<Id>) -> Self {
        match e {
            DirectoryError::NotFound(id) => FrameworkError::NotFound(id.to_string()),
            DirectoryError::IdsExhausted(max) => FrameworkError::IdsExhausted(max.to_string()),
        }
    }
}
