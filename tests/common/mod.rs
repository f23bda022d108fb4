//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - A full router over a seeded in-memory store
//! - Authentication test helpers
//! - A PostgreSQL fixture for the store tests
//! - Custom assertion macros

pub mod assertions;
pub mod auth_helpers;
pub mod database;

// Re-export commonly used utilities
pub use auth_helpers::*;
pub use test_app::*;
