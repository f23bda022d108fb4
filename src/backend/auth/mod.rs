//! Authentication Module
//!
//! User registration, login, password hashing and bearer tokens.
//!
//! # Architecture
//!
//! - **`users`** - User model and the `UserStore` persistence seam
//! - **`password`** - bcrypt hashing and verification
//! - **`sessions`** - JWT token issue and validation
//! - **`service`** - Registration and login flows
//! - **`handlers`** - HTTP handlers for `/register` and `/login`
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── users.rs        - User model and database operations
//! ├── password.rs     - Password hashing
//! ├── sessions.rs     - JWT token management
//! ├── service.rs      - AuthService
//! └── handlers/       - HTTP handlers
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username + password → password hashed → user stored → 201
//! 2. **Login**: username + password → hash verified → JWT token returned
//! 3. **Protected routes**: `Authorization: Bearer <token>` checked by
//!    `middleware::auth_middleware`
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Tokens are HS256 JWTs with a configurable lifetime (default 24 hours)
//! - Unknown user and wrong password return the same 401

/// User data model and database operations
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// Registration and login service
pub mod service;

/// HTTP handlers for authentication endpoints
pub mod handlers;

// Re-export commonly used types and handlers
pub use handlers::{login, register, CredentialsRequest, MessageResponse, TokenResponse};
pub use password::{HashError, PasswordHasher};
pub use service::{AuthError, AuthService};
pub use sessions::{Claims, TokenError, TokenService};
pub use users::{PgUserStore, User, UserStore};
