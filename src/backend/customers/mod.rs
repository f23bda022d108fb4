//! Customers Module
//!
//! Read-only search over customers and their bank accounts, pockets and term
//! deposits.
//!
//! # Module Structure
//!
//! ```text
//! customers/
//! ├── mod.rs       - Module exports and documentation
//! ├── filter.rs    - CustomerFilter and its SQL translation
//! ├── db.rs        - CustomerStore seam and the PostgreSQL store
//! ├── service.rs   - CustomerService
//! └── handlers.rs  - GET /customers
//! ```
//!
//! # Search Semantics
//!
//! - `name`, `email`: case-sensitive substring match
//! - `account_number`: exact match through `bank_accounts`
//! - Supplied filters combine with AND; results are ordered by customer id

pub mod filter;
pub mod db;
pub mod service;
pub mod handlers;

pub use db::{CustomerStore, PgCustomerStore};
pub use filter::CustomerFilter;
pub use handlers::{search_customers, SearchParams, SearchResponse};
pub use service::{CustomerService, SearchError};
