/**
 * Customer Search Server Entry Point
 *
 * Loads configuration, opens the store (optionally migrating and seeding
 * it), and serves the HTTP API.
 */

use clap::Parser;
use tracing_subscriber::EnvFilter;

use customer_search::backend::server::{
    create_app, load_dotenv, open_storage, ServerConfig, StartupOptions,
};

/// Customer search REST backend
#[derive(Debug, Parser)]
#[command(name = "customer-search-server", version, about)]
struct Cli {
    /// Apply database migrations before serving
    #[arg(long)]
    migrate: bool,

    /// Insert the initial customer data set if the table is empty
    #[arg(long)]
    seed: bool,

    /// Serve from an in-memory store instead of PostgreSQL
    #[arg(long)]
    in_memory: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load environment variables from .env file if present
    load_dotenv();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = ServerConfig::from_env()?;
    tracing::info!(
        "Database: {}:{}/{}",
        config.database.host,
        config.database.port,
        config.database.name
    );

    let options = StartupOptions {
        migrate: cli.migrate,
        seed: cli.seed,
        in_memory: cli.in_memory,
    };
    let storage = open_storage(&config, options).await?;
    let app = create_app(&config, storage);

    let listener = tokio::net::TcpListener::bind(config.server_address).await?;
    tracing::info!("Starting server on {}", config.server_address);
    axum::serve(listener, app).await?;

    Ok(())
}
