//! Backend Error Module
//!
//! Error taxonomy for the HTTP layer and its conversion into responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - BackendError and its status mapping
//! └── conversion.rs - IntoResponse, and From impls for service errors
//! ```
//!
//! Handlers return `Result<_, BackendError>` and use `?` on service calls;
//! `AuthError`, `SearchError`, `SharedError` and axum's `JsonRejection` /
//! `QueryRejection` all convert automatically.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::BackendError;
