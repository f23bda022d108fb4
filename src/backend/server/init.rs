/**
 * Server Initialization
 *
 * This module builds the application from configuration: it opens the store,
 * optionally migrates and seeds it, wires the services into `AppState`, and
 * produces the router.
 *
 * # Initialization Process
 *
 * 1. Open the store (PostgreSQL pool, or an in-memory store)
 * 2. Run migrations and seed data when requested
 * 3. Create `AppState` from the stores and auth settings
 * 4. Create and configure the router
 */

use axum::Router;
use sqlx::PgPool;
use std::sync::Arc;
use thiserror::Error;

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::sessions::TokenService;
use crate::backend::auth::users::PgUserStore;
use crate::backend::customers::db::PgCustomerStore;
use crate::backend::database::{self, seed_customers, StoreError};
use crate::backend::memory::MemoryStore;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::ServerConfig;
use crate::backend::server::state::AppState;

/// Failures that stop the server from starting
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("database connection failed: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("seeding failed: {0}")]
    Seed(#[from] StoreError),
}

/// Where users and customers live
#[derive(Clone)]
pub enum Storage {
    Postgres(PgPool),
    Memory(MemoryStore),
}

/// Startup actions requested on the command line
#[derive(Debug, Clone, Copy, Default)]
pub struct StartupOptions {
    pub migrate: bool,
    pub seed: bool,
    pub in_memory: bool,
}

/// Open the configured store, applying migrations and seed data on request
///
/// The in-memory store has no schema and is always seeded, since it starts
/// empty on every run.
pub async fn open_storage(
    config: &ServerConfig,
    options: StartupOptions,
) -> Result<Storage, StartupError> {
    if options.in_memory {
        tracing::info!("Using in-memory store");
        let store = MemoryStore::new();
        seed_customers(&store).await?;
        return Ok(Storage::Memory(store));
    }

    let pool = database::connect(&config.database).await?;

    if options.migrate {
        database::migrate(&pool).await?;
    }
    if options.seed {
        seed_customers(&PgCustomerStore::new(pool.clone())).await?;
    }

    Ok(Storage::Postgres(pool))
}

/// Wire services over the chosen store
pub fn build_state(config: &ServerConfig, storage: Storage) -> AppState {
    let tokens = TokenService::new(config.jwt_secret.clone(), config.token_ttl);
    if !tokens.has_secret() {
        tracing::warn!("JWT_SECRET is not set; logins will fail until it is configured");
    }

    let hasher = PasswordHasher::default();

    match storage {
        Storage::Postgres(pool) => AppState::new(
            Arc::new(PgUserStore::new(pool.clone())),
            Arc::new(PgCustomerStore::new(pool)),
            hasher,
            tokens,
        ),
        Storage::Memory(store) => {
            AppState::new(Arc::new(store.clone()), Arc::new(store), hasher, tokens)
        }
    }
}

/// Create and configure the Axum application
pub fn create_app(config: &ServerConfig, storage: Storage) -> Router {
    tracing::info!("Initializing customer search backend");
    let app_state = build_state(config, storage);
    let app = create_router(app_state);
    tracing::info!("Router configured");
    app
}
