/**
 * Backend Error Types
 *
 * Every failure a handler can report falls into one of four categories, each
 * with a fixed HTTP status:
 *
 * - `ValidationError` - client data missing or malformed (400)
 * - `AuthError` - credentials or token rejected (401)
 * - `NotFoundError` - search matched nothing (404)
 * - `InternalError` - store, hashing or signing failure (500)
 *
 * Internal errors keep their detail for logging only; clients always see the
 * generic "internal server error" text.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::shared::message;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// # Usage
///
/// ```rust
/// use customer_search::backend::error::BackendError;
///
/// let err = BackendError::validation("username is required and password is required");
/// let err = BackendError::unauthorized();
/// let err = BackendError::internal("connection refused");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Client-supplied data is missing or malformed
    #[error("Validation error: {message}")]
    ValidationError {
        /// Human-readable error message
        message: String,
    },

    /// Credentials or token rejected
    #[error("Auth error: {message}")]
    AuthError {
        /// Human-readable error message
        message: String,
    },

    /// The requested records do not exist
    #[error("Not found: {message}")]
    NotFoundError {
        /// Human-readable error message
        message: String,
    },

    /// Store, hashing or signing failure
    ///
    /// The detail is logged, never returned to the client.
    #[error("Internal error: {detail}")]
    InternalError {
        /// Diagnostic detail for the logs
        detail: String,
    },
}

impl BackendError {
    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError {
            message: message.into(),
        }
    }

    /// Create a new auth error
    pub fn auth(message: impl Into<String>) -> Self {
        Self::AuthError {
            message: message.into(),
        }
    }

    /// The generic 401 used by the auth middleware
    pub fn unauthorized() -> Self {
        Self::auth(message::UNAUTHORIZED)
    }

    /// Create a new not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFoundError {
            message: message.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(detail: impl Into<String>) -> Self {
        Self::InternalError {
            detail: detail.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// - `ValidationError` - 400 Bad Request
    /// - `AuthError` - 401 Unauthorized
    /// - `NotFoundError` - 404 Not Found
    /// - `InternalError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError { .. } => StatusCode::BAD_REQUEST,
            Self::AuthError { .. } => StatusCode::UNAUTHORIZED,
            Self::NotFoundError { .. } => StatusCode::NOT_FOUND,
            Self::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the client
    pub fn message(&self) -> String {
        match self {
            Self::ValidationError { message }
            | Self::AuthError { message }
            | Self::NotFoundError { message } => message.clone(),
            Self::InternalError { .. } => message::INTERNAL_SERVER_ERROR.to_string(),
        }
    }
}

impl From<SharedError> for BackendError {
    fn from(err: SharedError) -> Self {
        tracing::warn!("Rejected field {}: {}", err.field(), err.client_message());
        Self::validation(err.client_message())
    }
}
