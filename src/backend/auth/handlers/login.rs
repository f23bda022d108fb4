/**
 * Login Handler
 *
 * `POST /login`: exchanges a username and password for a bearer token.
 *
 * # Security
 *
 * - Passwords are verified using bcrypt
 * - Unknown user and wrong password both return the same 401 body
 * - Passwords and tokens are never logged
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    response::Json,
};

use crate::backend::auth::handlers::types::{CredentialsRequest, TokenResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;

/// Login handler
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body or blank fields
/// * `401 Unauthorized` - Unknown user or wrong password
/// * `500 Internal Server Error` - Lookup or token signing failed
///
/// # Example Response
///
/// ```json
/// {"token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9..."}
/// ```
pub async fn login(
    State(auth): State<AuthService>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>, BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    tracing::info!("Login request for: {}", request.username);
    let token = auth.login(&request.username, &request.password).await?;

    Ok(Json(TokenResponse { token }))
}
