/**
 * Authentication Middleware
 *
 * Protects routes that require a logged-in user. The bearer token is taken
 * from the `Authorization` header and validated; on success the user id is
 * attached to the request extensions for handlers to read via `AuthUser`.
 *
 * Every failure returns the same 401 body and the wrapped handler never runs.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::TokenService;
use crate::backend::error::BackendError;

/// Authenticated user data extracted from JWT token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: i64,
}

/// Split an `Authorization` header value into its bearer token
///
/// Accepts exactly `Bearer <token>`; the scheme is case-insensitive and
/// surrounding whitespace is ignored. Anything else gives `None`.
pub fn parse_bearer(header: &str) -> Option<&str> {
    let mut parts = header.split_whitespace();
    let scheme = parts.next()?;
    let token = parts.next()?;

    if parts.next().is_some() || !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    Some(token)
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the bearer token from the Authorization header
/// 2. Validates signature and expiry
/// 3. Attaches `AuthenticatedUser` to request extensions
///
/// Returns 401 Unauthorized if the token is missing or invalid.
pub async fn auth_middleware(
    State(tokens): State<TokenService>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            BackendError::unauthorized()
        })?
        .to_str()
        .map_err(|_| {
            tracing::warn!("Authorization header is not valid UTF-8");
            BackendError::unauthorized()
        })?;

    let token = parse_bearer(header).ok_or_else(|| {
        tracing::warn!("Malformed Authorization header");
        BackendError::unauthorized()
    })?;

    let claims = tokens.validate(token).map_err(|e| {
        tracing::warn!("Rejected token: {}", e);
        BackendError::unauthorized()
    })?;

    request.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.user_id(),
    });

    Ok(next.run(request).await)
}

/// Axum extractor for authenticated user
///
/// Only usable on routes behind `auth_middleware`; elsewhere it rejects with
/// 401.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user = parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::unauthorized()
            })?;

        Ok(AuthUser(user))
    }
}
