//! Shared Error Types
//!
//! This module defines error types for request payload problems that are
//! detected before any service is called.
//!
//! # Usage
//!
//! ```rust
//! use customer_search::shared::error::SharedError;
//!
//! // Create a validation error
//! let error = SharedError::validation("username", "username is required");
//! ```
use thiserror::Error;

/// Request payload errors shared by the handlers
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

    /// Message that is safe to hand back to the client
    pub fn client_message(&self) -> &str {
        match self {
            Self::ValidationError { message, .. } => message,
        }
    }
}
