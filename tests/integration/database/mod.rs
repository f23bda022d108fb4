//! PostgreSQL store tests

mod customers_test;
