//! Authentication Handlers Module
//!
//! HTTP handlers for the public authentication endpoints.
//!
//! # Module Structure
//!
//! ```text
//! handlers/
//! ├── mod.rs       - Module exports and documentation
//! ├── types.rs     - Request and response types
//! ├── register.rs  - User registration handler
//! └── login.rs     - User authentication handler
//! ```
//!
//! # Handlers
//!
//! - **`register`** - POST /register - User registration
//! - **`login`** - POST /login - User authentication
//!
//! # Example
//!
//! ```rust,no_run
//! use customer_search::backend::auth::handlers::{login, register};
//! use customer_search::backend::server::AppState;
//! use axum::{routing::post, Router};
//!
//! let router: Router<AppState> = Router::new()
//!     .route("/register", post(register))
//!     .route("/login", post(login));
//! ```

/// Request and response types
pub mod types;

/// Register handler
pub mod register;

/// Login handler
pub mod login;

// Re-export commonly used types
pub use types::{CredentialsRequest, MessageResponse, TokenResponse};

// Re-export handlers
pub use login::login;
pub use register::register;
