//! Routes Module
//!
//! Route configuration for the HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs         - Module exports and documentation
//! ├── router.rs      - Main router, layers and fallback
//! └── api_routes.rs  - Public and protected API routes
//! ```
//!
//! # Route Summary
//!
//! | Method | Path         | Auth   | Handler            |
//! |--------|--------------|--------|--------------------|
//! | POST   | `/register`  | none   | `register`         |
//! | POST   | `/login`     | none   | `login`            |
//! | GET    | `/customers` | bearer | `search_customers` |

/// Main router creation
pub mod router;

/// API route configuration
pub mod api_routes;

pub use router::create_router;
