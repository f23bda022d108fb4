//! Database test fixtures
//!
//! Store tests run against the PostgreSQL named by `DATABASE_URL` and are
//! skipped when it is unset. Each fixture truncates every table, so fixtures
//! are handed out one at a time.

use sqlx::PgPool;
use tokio::sync::{Mutex, MutexGuard};

use customer_search::backend::database::migrate;

static DATABASE_LOCK: Mutex<()> = Mutex::const_new(());

/// Exclusive handle on a migrated, empty test database
pub struct TestDatabase {
    pool: PgPool,
    _guard: MutexGuard<'static, ()>,
}

impl TestDatabase {
    /// Connect, migrate and empty the database, or `None` without `DATABASE_URL`
    pub async fn connect() -> Option<Self> {
        let Ok(database_url) = std::env::var("DATABASE_URL") else {
            eprintln!("DATABASE_URL not set; skipping PostgreSQL store test");
            return None;
        };

        let guard = DATABASE_LOCK.lock().await;
        let pool = PgPool::connect(&database_url)
            .await
            .expect("Failed to create test database pool");
        migrate(&pool).await.expect("Failed to run migrations");
        cleanup_test_data(&pool)
            .await
            .expect("Failed to clean test data");

        Some(Self {
            pool,
            _guard: guard,
        })
    }

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

/// Remove all rows and restart the id sequences
pub async fn cleanup_test_data(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        "TRUNCATE TABLE term_deposits, pockets, bank_accounts, customers, users RESTART IDENTITY CASCADE",
    )
    .execute(pool)
    .await?;
    Ok(())
}
