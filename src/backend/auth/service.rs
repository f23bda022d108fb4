/**
 * Authentication Service
 *
 * Registration: validate → hash → persist.
 * Login: validate → look up → verify → issue token.
 *
 * "No such user" and "wrong password" stay separate here so they can be
 * logged separately; the HTTP layer reports both as the same 401.
 */

use std::sync::Arc;
use thiserror::Error;

use crate::backend::auth::password::{HashError, PasswordHasher};
use crate::backend::auth::sessions::{TokenError, TokenService};
use crate::backend::auth::users::{User, UserStore};
use crate::backend::database::StoreError;

#[derive(Debug, Error)]
pub enum AuthError {
    /// Username or password is empty
    #[error("missing field: {0}")]
    MissingField(&'static str),

    #[error("user not found")]
    UserNotFound,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error(transparent)]
    Hashing(#[from] HashError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error("persistence error: {0}")]
    Persistence(#[from] StoreError),
}

#[derive(Clone)]
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    tokens: TokenService,
}

impl AuthService {
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher, tokens: TokenService) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Token service used to sign login tokens
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }

    /// Create an account; the stored password is the bcrypt hash
    pub async fn register(&self, username: &str, password: &str) -> Result<User, AuthError> {
        validate_credentials(username, password)?;

        let password_hash = self.hasher.hash(password)?;
        let user = self.users.create_user(username, &password_hash).await?;

        tracing::info!("User registered: {} (id {})", user.username, user.id);
        Ok(user)
    }

    /// Check credentials and issue a bearer token
    pub async fn login(&self, username: &str, password: &str) -> Result<String, AuthError> {
        validate_credentials(username, password)?;

        let user = self
            .users
            .find_by_username(username)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        if !self.hasher.verify(password, &user.password_hash) {
            return Err(AuthError::InvalidCredentials);
        }

        let token = self.tokens.issue(user.id)?;
        tracing::info!("User logged in: {} (id {})", user.username, user.id);
        Ok(token)
    }
}

fn validate_credentials(username: &str, password: &str) -> Result<(), AuthError> {
    if username.is_empty() {
        return Err(AuthError::MissingField("username"));
    }
    if password.is_empty() {
        return Err(AuthError::MissingField("password"));
    }
    Ok(())
}
