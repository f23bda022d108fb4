/**
 * Register Handler
 *
 * `POST /register`: creates an account from a username and password.
 *
 * # Registration Process
 *
 * 1. Reject malformed JSON or blank fields (400)
 * 2. Hash the password with bcrypt
 * 3. Persist the user (a duplicate username is a persistence failure, 500)
 * 4. Return 201 with a confirmation message
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};

use crate::backend::auth::handlers::types::{CredentialsRequest, MessageResponse};
use crate::backend::auth::service::AuthService;
use crate::backend::error::BackendError;
use crate::shared::message;

/// Register handler
///
/// # Example Request
///
/// ```http
/// POST /register HTTP/1.1
/// Content-Type: application/json
///
/// {"username": "alice", "password": "password123"}
/// ```
///
/// # Example Response
///
/// ```json
/// {"message": "user registered successfully"}
/// ```
pub async fn register(
    State(auth): State<AuthService>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<MessageResponse>), BackendError> {
    let Json(request) = payload?;
    request.validate()?;

    tracing::info!("Registration request for: {}", request.username);
    auth.register(&request.username, &request.password).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new(message::USER_REGISTERED)),
    ))
}
