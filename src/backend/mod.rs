//! Backend Module
//!
//! Server-side code: the Axum HTTP server, authentication, customer search
//! and persistence.
//!
//! # Module Structure
//!
//! - **`server`** - Configuration, state and app initialization
//! - **`routes`** - Route table and layers
//! - **`auth`** - Registration, login, password hashing, tokens
//! - **`middleware`** - Bearer token check for protected routes
//! - **`customers`** - Customer search
//! - **`database`** - PostgreSQL connection, migrations, seed data
//! - **`memory`** - In-memory store for tests and `--in-memory` runs
//! - **`error`** - Error taxonomy and HTTP responses
//!
//! # Request Flow
//!
//! ```text
//! HTTP request
//!   → TraceLayer / CorsLayer
//!   → auth_middleware (protected routes only)
//!   → handler → service → store
//!   → Result<_, BackendError> → JSON response
//! ```

pub mod server;

pub mod routes;

pub mod error;

pub mod auth;

pub mod middleware;

pub mod customers;

pub mod database;

pub mod memory;

pub use error::BackendError;
pub use memory::MemoryStore;
pub use server::{create_app, AppState};
