/**
 * Authentication Handler Types
 *
 * Request and response bodies for `POST /register` and `POST /login`.
 * Both endpoints take the same credentials shape.
 */

use serde::{Deserialize, Serialize};

use crate::shared::message;
use crate::shared::SharedError;

/// Credentials request
///
/// Body of both `POST /register` and `POST /login`. Missing fields
/// deserialize as empty strings so that "field absent" and "field blank" are
/// reported the same way.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct CredentialsRequest {
    /// Account name, unique per user
    #[serde(default)]
    pub username: String,
    /// Plaintext password (hashed before storage, never logged)
    #[serde(default)]
    pub password: String,
}

impl CredentialsRequest {
    /// Reject blank fields before any service work happens
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.username.is_empty() || self.password.is_empty() {
            let field = if self.username.is_empty() { "username" } else { "password" };
            return Err(SharedError::validation(field, message::credentials_required()));
        }
        Ok(())
    }
}

/// Plain acknowledgement body
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Login response
///
/// Only the bearer token; clients send it back as
/// `Authorization: Bearer <token>`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenResponse {
    pub token: String,
}
