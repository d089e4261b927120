//! HTTP server command

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use trivia_server::{run_server, AppState, MemoryStore, PgStore, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Database URL (overrides DB_HOST/DB_USER/DB_PASSWORD/DB_NAME)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum pooled database connections
    #[arg(long, default_value_t = trivia_server::config::DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Create missing tables before serving
    #[arg(long)]
    pub migrate: bool,

    /// Serve a seeded in-memory store instead of Postgres
    #[arg(long, conflicts_with = "migrate")]
    pub memory: bool,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let config = ServerConfig {
        bind_addr: args.bind,
        max_connections: args.max_connections,
    };

    let state = if args.memory {
        tracing::warn!("Serving from an in-memory store; changes are lost on exit");
        AppState::new(MemoryStore::seeded())
    } else {
        let database_url = super::database_url(args.database_url);
        let store = PgStore::connect(&database_url, config.max_connections)
            .await
            .context("Failed to create database pool")?;

        if args.migrate {
            store.migrate().await.context("Failed to run migrations")?;
        }

        AppState::new(store)
    };

    tracing::info!("Starting trivia server on {}", config.bind_addr);

    // Blocks until shutdown
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
