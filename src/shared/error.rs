//! Shared Error Types
//!
//! Errors raised while checking inbound requests before they reach the
//! authentication service. They describe which field was rejected and why,
//! and are safe to return to the caller verbatim.
//!
//! # Usage
//!
//! ```rust
//! use sso::shared::error::SharedError;
//!
//! let error = SharedError::validation("email", "email is required");
//! assert_eq!(error.to_string(), "Validation error in field 'email': email is required");
//! ```
use thiserror::Error;

/// Request validation errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// A request field failed validation
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

    /// Message suitable for the response body
    pub fn message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
