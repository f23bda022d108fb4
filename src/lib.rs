//! Customer Search - Main Library
//!
//! A REST backend that serves customer-record search behind JWT
//! authentication, with a separate registration and login flow.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that appear on the wire
//!   - Customer search results and seed shapes
//!   - Client-facing messages
//!   - Request validation errors
//!
//! - **`backend`** - Server-side code
//!   - Axum HTTP server and route table
//!   - Authentication (bcrypt, JWT) and the auth middleware
//!   - Customer search over PostgreSQL or an in-memory store
//!
//! # Usage
//!
//! ```rust,no_run
//! use customer_search::backend::server::{create_app, Storage, ServerConfigBuilder};
//! use customer_search::backend::MemoryStore;
//!
//! let config = ServerConfigBuilder::new().jwt_secret("dev-secret").build();
//! let app = create_app(&config, Storage::Memory(MemoryStore::new()));
//! // Serve `app` with axum::serve
//! ```
//!
//! # HTTP API
//!
//! - `POST /register` - `{username, password}` → 201
//! - `POST /login` - `{username, password}` → `{token}`
//! - `GET /customers?name=&email=&account_number=` - bearer token required
//!
//! # Error Handling
//!
//! - Each layer has its own `thiserror` enum (`HashError`, `TokenError`,
//!   `StoreError`, `AuthError`, `SearchError`, `ConfigError`)
//! - Handlers convert them into `backend::error::BackendError`, which renders
//!   `{"error": ..., "status": ...}` with the matching status code

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
pub mod backend;
