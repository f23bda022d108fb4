/**
 * Error Conversion
 *
 * Turns service errors into the four backend categories and backend errors
 * into HTTP responses.
 *
 * # Response Format
 *
 * ```json
 * {
 *   "error": "Error message",
 *   "status": 400
 * }
 * ```
 */

use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    response::{IntoResponse, Json, Response},
};

use crate::backend::auth::service::AuthError;
use crate::backend::customers::service::SearchError;
use crate::backend::error::types::BackendError;
use crate::shared::message;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let BackendError::InternalError { detail } = &self {
            tracing::error!("Request failed: {}", detail);
        }

        let body = serde_json::json!({
            "error": self.message(),
            "status": status.as_u16(),
        });

        (status, Json(body)).into_response()
    }
}

impl From<AuthError> for BackendError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingField(_) => BackendError::validation(message::credentials_required()),
            AuthError::UserNotFound | AuthError::InvalidCredentials => {
                tracing::warn!("Login rejected: {}", err);
                BackendError::auth(message::INVALID_CREDENTIALS)
            }
            AuthError::Hashing(_) | AuthError::Token(_) | AuthError::Persistence(_) => {
                BackendError::internal(err.to_string())
            }
        }
    }
}

impl From<SearchError> for BackendError {
    fn from(err: SearchError) -> Self {
        match err {
            SearchError::MissingFilter => BackendError::validation(message::SEARCH_FILTER_REQUIRED),
            SearchError::Store(e) => BackendError::internal(e.to_string()),
        }
    }
}

impl From<JsonRejection> for BackendError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());
        BackendError::validation(message::BAD_REQUEST)
    }
}

impl From<QueryRejection> for BackendError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::warn!("Rejected query string: {}", rejection.body_text());
        BackendError::validation(message::BAD_REQUEST)
    }
}
