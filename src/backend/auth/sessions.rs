/**
 * Session Tokens
 *
 * This module issues and validates the HS256 bearer tokens handed out by
 * `POST /login`. A token carries the user id (`sub`) plus issue and expiry
 * timestamps; nothing about sessions is persisted server-side.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Default token lifetime
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Issued at time (Unix timestamp)
    pub iat: i64,
}

impl Claims {
    /// User id carried by the token
    ///
    /// Only meaningful on claims returned by [`TokenService::validate`], which
    /// rejects tokens whose subject is not numeric.
    pub fn user_id(&self) -> i64 {
        self.sub.parse().unwrap_or_default()
    }
}

/// Token issue/validation failures
#[derive(Debug, Error)]
pub enum TokenError {
    /// No signing key configured, or the encoder failed
    #[error("token signing failed: {0}")]
    Signing(String),

    /// Bad signature, malformed token, or unusable subject
    #[error("invalid token: {0}")]
    Invalid(String),

    /// Signature is fine but `exp` has passed
    #[error("token expired")]
    Expired,
}

/// Issues and validates signed bearer tokens
#[derive(Clone)]
pub struct TokenService {
    secret: Option<Arc<str>>,
    ttl: Duration,
}

impl std::fmt::Debug for TokenService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenService")
            .field("secret", &self.secret.as_ref().map(|_| "<redacted>"))
            .field("ttl", &self.ttl)
            .finish()
    }
}

impl TokenService {
    /// Create a token service
    ///
    /// An empty secret counts as no secret: issuing then fails with
    /// [`TokenError::Signing`] and every token is rejected.
    pub fn new(secret: Option<String>, ttl: Duration) -> Self {
        let secret = secret.filter(|s| !s.is_empty()).map(Arc::from);
        Self { secret, ttl }
    }

    /// Whether a signing key is configured
    pub fn has_secret(&self) -> bool {
        self.secret.is_some()
    }

    /// Issue a token for a user, expiring `ttl` from now
    pub fn issue(&self, user_id: i64) -> Result<String, TokenError> {
        self.issue_with_expiry(user_id, Utc::now() + self.ttl)
    }

    /// Issue a token with an explicit expiry
    pub fn issue_with_expiry(
        &self,
        user_id: i64,
        expires_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let secret = self
            .secret
            .as_ref()
            .ok_or_else(|| TokenError::Signing("signing key not configured".to_string()))?;

        let claims = Claims {
            sub: user_id.to_string(),
            exp: expires_at.timestamp(),
            iat: Utc::now().timestamp(),
        };

        let key = EncodingKey::from_secret(secret.as_bytes());
        encode(&Header::new(Algorithm::HS256), &claims, &key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    /// Verify a token's signature and expiry and return its claims
    pub fn validate(&self, token: &str) -> Result<Claims, TokenError> {
        if token.is_empty() {
            return Err(TokenError::Invalid("empty token".to_string()));
        }
        let secret = self
            .secret
            .as_ref()
            .ok_or_else(|| TokenError::Invalid("signing key not configured".to_string()))?;

        let key = DecodingKey::from_secret(secret.as_bytes());
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        let token_data = decode::<Claims>(token, &key, &validation).map_err(|e| match e.kind() {
            ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid(e.to_string()),
        })?;

        token_data
            .claims
            .sub
            .parse::<i64>()
            .map_err(|e| TokenError::Invalid(format!("invalid user ID in token: {}", e)))?;

        Ok(token_data.claims)
    }
}
