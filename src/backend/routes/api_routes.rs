/**
 * API Route Handlers
 *
 * # Routes
 *
 * ## Public
 * - `POST /register` - User registration
 * - `POST /login` - User login
 *
 * ## Protected (bearer token required)
 * - `GET /customers` - Customer search
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::backend::auth::{login, register};
use crate::backend::customers::search_customers;
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure API routes
///
/// The auth middleware wraps only the protected group, so `/register` and
/// `/login` stay reachable without a token.
pub fn configure_api_routes(router: Router<AppState>, app_state: &AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/customers", get(search_customers))
        .route_layer(middleware::from_fn_with_state(
            app_state.tokens.clone(),
            auth_middleware,
        ));

    router
        .route("/register", post(register))
        .route("/login", post(login))
        .merge(protected)
}
