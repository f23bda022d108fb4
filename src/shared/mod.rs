//! Shared Module
//!
//! Types that do not depend on the HTTP server or the database driver:
//! customer records as they travel over the API, client-facing messages, and
//! payload error types.

/// Customer records and their projections
pub mod customer;

/// Client-facing response messages
pub mod message;

/// Shared error types
pub mod error;

pub use customer::{BankAccount, Customer, NewBankAccount, NewCustomer, Pocket, TermDeposit};
pub use error::SharedError;
