//! Property-based tests
//!
//! Uses proptest to check auth and search invariants over generated inputs

mod auth_proptest;
mod filter_proptest;
