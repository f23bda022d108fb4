//! Database Module
//!
//! Connection, migrations and seed data for the PostgreSQL store, plus the
//! `StoreError` type every store implementation reports.
//!
//! # Module Structure
//!
//! ```text
//! database/
//! ├── mod.rs   - StoreError, connect, migrate
//! └── seed.rs  - Initial customer data set
//! ```

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;

use crate::backend::server::config::DatabaseConfig;

/// Seed data for the customers tables
pub mod seed;

pub use seed::{default_customers, seed_customers};

/// Failure reported by a store implementation
#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique constraint rejected the write
    #[error("duplicate value for {0}")]
    Duplicate(String),

    /// Any other database failure
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Classify an insert failure, turning unique violations into `Duplicate`
    pub fn from_insert(field: &str, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(ref db) if db.is_unique_violation() => {
                Self::Duplicate(field.to_string())
            }
            other => Self::Database(other),
        }
    }
}

/// Open a connection pool for the configured database
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.connection_url())
        .await?;

    tracing::info!("Database connection pool created successfully");
    Ok(pool)
}

/// Apply pending migrations from `./migrations`
pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    tracing::info!("Running database migrations...");
    sqlx::migrate!("./migrations").run(pool).await?;
    tracing::info!("Database migrations completed successfully");
    Ok(())
}
