/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds the three services the handlers need. Each service is
 * `Clone` and shares its store through an `Arc`, so cloning the state per
 * request is cheap.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let a handler ask for just the service it
 * uses:
 *
 * ```rust
 * use axum::extract::State;
 * use customer_search::backend::customers::CustomerService;
 *
 * async fn handler(State(customers): State<CustomerService>) {
 *     // ...
 * }
 * ```
 */

use axum::extract::FromRef;
use std::sync::Arc;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::service::AuthService;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::UserStore;
use crate::backend::customers::db::CustomerStore;
use crate::backend::customers::service::CustomerService;

/// Shared state for every request handler
#[derive(Clone)]
pub struct AppState {
    /// Registration and login
    pub auth: AuthService,

    /// Customer search
    pub customers: CustomerService,

    /// Token validation for the auth middleware
    ///
    /// The same signing key and lifetime as `auth` uses to issue tokens.
    pub tokens: TokenService,
}

impl AppState {
    /// Wire the services over the given stores
    pub fn new(
        users: Arc<dyn UserStore>,
        customers: Arc<dyn CustomerStore>,
        hasher: PasswordHasher,
        tokens: TokenService,
    ) -> Self {
        Self {
            auth: AuthService::new(users, hasher, tokens.clone()),
            customers: CustomerService::new(customers),
            tokens,
        }
    }
}

impl FromRef<AppState> for AuthService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth.clone()
    }
}

impl FromRef<AppState> for CustomerService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.customers.clone()
    }
}

impl FromRef<AppState> for TokenService {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
