//! Server Module
//!
//! Initialization and configuration of the Axum HTTP server.
//!
//! # Architecture
//!
//! - **`state`** - `AppState` and `FromRef` implementations
//! - **`config`** - Environment and `.env` configuration loading
//! - **`init`** - Store setup, state wiring and app creation
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── state.rs        - AppState and FromRef implementations
//! ├── config.rs       - ServerConfig, DatabaseConfig, ConfigError
//! └── init.rs         - open_storage, build_state, create_app
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `.env` file, then `ServerConfig::from_env`
//! 2. **Storage**: PostgreSQL pool (optionally migrated and seeded) or an
//!    in-memory store
//! 3. **State Creation**: auth, customer and token services
//! 4. **Router Creation**: routes, auth middleware, CORS and tracing layers
//!
//! # Example
//!
//! ```rust,no_run
//! use customer_search::backend::server::{create_app, open_storage, ServerConfig, StartupOptions};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let storage = open_storage(&config, StartupOptions::default()).await?;
//! let app = create_app(&config, storage);
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

// Re-export commonly used types
pub use config::{load_dotenv, ConfigError, DatabaseConfig, ServerConfig, ServerConfigBuilder};
pub use init::{build_state, create_app, open_storage, StartupError, StartupOptions, Storage};
pub use state::AppState;
