//! HTTP server command for the expense API
//!
//! Connects the pool, bootstraps the schema, then runs the server until
//! Ctrl+C or SIGTERM.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use expensectl_server::db::{create_pool_with_options, migrations, pool::DEFAULT_MAX_CONNECTIONS};
use expensectl_server::http::server::DEFAULT_PORT;
use expensectl_server::{run_server, ExpenseRepo, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Interface to bind to (an IP address, not a hostname)
    #[arg(long, env = "EXPENSECTL_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Port to listen on (accepts "2565" or ":2565")
    #[arg(long, short = 'p', env = "PORT", default_value_t = DEFAULT_PORT, value_parser = parse_port)]
    pub port: u16,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    pub database_url: Option<String>,

    /// Maximum connections in the database pool
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    pub max_connections: u32,

    /// Seconds to let in-flight requests finish after a shutdown signal
    #[arg(long, default_value_t = 10)]
    pub shutdown_timeout: u64,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

impl ServeArgs {
    fn server_config(&self) -> ServerConfig {
        ServerConfig {
            bind_addr: SocketAddr::new(self.host, self.port),
            cors_permissive: self.cors_permissive,
            shutdown_timeout: Duration::from_secs(self.shutdown_timeout),
        }
    }
}

/// Parse a port given either bare or in `:port` listen-address form.
fn parse_port(s: &str) -> Result<u16, String> {
    let trimmed = s.trim();
    let digits = trimmed.strip_prefix(':').unwrap_or(trimmed);
    digits
        .parse::<u16>()
        .map_err(|e| format!("invalid port '{}': {}", s, e))
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let database_url = args
        .database_url
        .clone()
        .context("DATABASE_URL not set. Set via --database-url, DATABASE_URL env, or .env")?;

    let config = args.server_config();
    tracing::info!("Starting expensectl server on {}", config.bind_addr);

    let pool = create_pool_with_options(&database_url, args.max_connections)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to create expenses table")?;

    // Run server (blocks until shutdown)
    run_server(Arc::new(ExpenseRepo::new(pool)), config)
        .await
        .context("Server error")?;

    Ok(())
}
