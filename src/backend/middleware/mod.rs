//! Middleware Module
//!
//! HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer token check for the protected route group
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use customer_search::backend::auth::TokenService;
//! use customer_search::backend::middleware::auth_middleware;
//!
//! # fn example(tokens: TokenService) -> Router {
//! Router::new()
//!     .route("/private", get(|| async { "ok" }))
//!     .layer(middleware::from_fn_with_state(tokens, auth_middleware))
//! # }
//! ```

pub mod auth;

pub use auth::{auth_middleware, parse_bearer, AuthUser, AuthenticatedUser};
