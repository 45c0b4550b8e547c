//! Shared Error Types
//!
//! This module defines error types that describe bad user input. They carry
//! no HTTP knowledge; the backend maps them onto responses.
//!
//! # Error Categories
//!
//! - `ValidationError` - A submitted form field failed validation
//!
//! # Usage
//!
//! ```rust
//! use notekeeper::shared::error::SharedError;
//!
//! let error = SharedError::validation("username", "Username is required");
//! assert_eq!(error.field(), "username");
//! ```
use thiserror::Error;

/// Errors raised while validating user input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },
}

impl SharedError {
    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Name of the offending field
    pub fn field(&self) -> &str {
        match self {
            Self::ValidationError { field, .. } => field,
        }
    }

    /// Message meant for the person filling in the form
    pub fn user_message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}

/// Reject a value that is empty or made only of whitespace.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), SharedError> {
    if value.trim().is_empty() {
        return Err(SharedError::validation(field, format!("{} cannot be empty", capitalize(field))));
    }
    Ok(())
}

fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
