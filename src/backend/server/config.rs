/**
 * Server Configuration
 *
 * This module loads server configuration from environment variables, after
 * optionally reading a `.env` file.
 *
 * # Environment Variables
 *
 * - `DATABASE_URL` / `DB_SOURCE` - Full PostgreSQL URL (takes precedence)
 * - `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`, `DB_SSL_MODE` -
 *   Parts used to build the URL when no full URL is set
 * - `DB_MAX_CONNECTIONS` - Pool size (default 5)
 * - `JWT_SECRET` - Token signing key; login fails without it
 * - `JWT_EXPIRATION` - Token lifetime in seconds (default 86400)
 * - `SERVER_ADDRESS` - Listen address (default `0.0.0.0:8080`, `:port` allowed)
 *
 * # Error Handling
 *
 * Values that are present but unparseable are errors; missing values fall
 * back to defaults.
 */

use std::net::SocketAddr;

use chrono::Duration;
use thiserror::Error;

use crate::backend::auth::sessions::DEFAULT_TOKEN_TTL_SECS;

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:8080";
pub const DEFAULT_DB_PORT: u16 = 5432;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Configuration loading failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

impl ConfigError {
    fn invalid(key: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key,
            value: value.into(),
        }
    }
}

/// PostgreSQL connection settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    /// Full connection URL; overrides the individual parts when set
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
    pub ssl_mode: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            host: "localhost".to_string(),
            port: DEFAULT_DB_PORT,
            user: "user".to_string(),
            password: "password".to_string(),
            name: "customer_search".to_string(),
            ssl_mode: "disable".to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    /// URL handed to the connection pool
    pub fn connection_url(&self) -> String {
        match &self.url {
            Some(url) => url.clone(),
            None => format!(
                "postgres://{}:{}@{}:{}/{}?sslmode={}",
                self.user, self.password, self.host, self.port, self.name, self.ssl_mode
            ),
        }
    }
}

/// Complete server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub database: DatabaseConfig,
    pub jwt_secret: Option<String>,
    pub token_ttl: Duration,
    pub server_address: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfigBuilder::new().build()
    }
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through an arbitrary key lookup
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = DatabaseConfig::default();

        let port = match get("DB_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::invalid("DB_PORT", raw))?,
            None => DEFAULT_DB_PORT,
        };

        let max_connections = match get("DB_MAX_CONNECTIONS") {
            Some(raw) => match raw.trim().parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::invalid("DB_MAX_CONNECTIONS", raw)),
            },
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let database = DatabaseConfig {
            url: get("DATABASE_URL").or_else(|| get("DB_SOURCE")),
            host: get("DB_HOST").unwrap_or(defaults.host),
            port,
            user: get("DB_USER").unwrap_or(defaults.user),
            password: get("DB_PASSWORD").unwrap_or(defaults.password),
            name: get("DB_NAME").unwrap_or(defaults.name),
            ssl_mode: get("DB_SSL_MODE").unwrap_or(defaults.ssl_mode),
            max_connections,
        };

        let token_ttl = match get("JWT_EXPIRATION") {
            Some(raw) => match raw.trim().parse::<i64>() {
                Ok(secs) if secs > 0 => Duration::seconds(secs),
                _ => return Err(ConfigError::invalid("JWT_EXPIRATION", raw)),
            },
            None => Duration::seconds(DEFAULT_TOKEN_TTL_SECS),
        };

        let server_address = match get("SERVER_ADDRESS") {
            Some(raw) => parse_address(&raw)?,
            None => parse_address(DEFAULT_SERVER_ADDRESS)?,
        };

        Ok(Self {
            database,
            jwt_secret: get("JWT_SECRET"),
            token_ttl,
            server_address,
        })
    }
}

/// Parse a listen address; `:8080` binds all interfaces
fn parse_address(raw: &str) -> Result<SocketAddr, ConfigError> {
    let raw = raw.trim();
    let full = if raw.starts_with(':') {
        format!("0.0.0.0{}", raw)
    } else {
        raw.to_string()
    };
    full.parse()
        .map_err(|_| ConfigError::invalid("SERVER_ADDRESS", raw))
}

/// Load `.env`, or `.env.test` when `TEST_ENV=true`
///
/// A missing file is not an error.
pub fn load_dotenv() {
    let test_env = std::env::var("TEST_ENV").map(|v| v == "true").unwrap_or(false);
    let loaded = if test_env {
        dotenv::from_filename(".env.test")
    } else {
        dotenv::dotenv()
    };

    match loaded {
        Ok(path) => tracing::debug!("Loaded environment from {}", path.display()),
        Err(_) => tracing::debug!("No env file found, using process environment"),
    }
}

/// Builder for programmatic configuration (tests, embedding)
#[derive(Debug, Clone, Default)]
pub struct ServerConfigBuilder {
    database: DatabaseConfig,
    jwt_secret: Option<String>,
    token_ttl: Option<Duration>,
    server_address: Option<SocketAddr>,
}

impl ServerConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.database.url = Some(url.into());
        self
    }

    pub fn database(mut self, database: DatabaseConfig) -> Self {
        self.database = database;
        self
    }

    pub fn jwt_secret(mut self, secret: impl Into<String>) -> Self {
        self.jwt_secret = Some(secret.into());
        self
    }

    pub fn token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = Some(ttl);
        self
    }

    pub fn server_address(mut self, addr: SocketAddr) -> Self {
        self.server_address = Some(addr);
        self
    }

    pub fn build(self) -> ServerConfig {
        ServerConfig {
            database: self.database,
            jwt_secret: self.jwt_secret,
            token_ttl: self
                .token_ttl
                .unwrap_or_else(|| Duration::seconds(DEFAULT_TOKEN_TTL_SECS)),
            server_address: self
                .server_address
                .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8080))),
        }
    }
}
