//! expensectl CLI - expense tracking HTTP service
//!
//! Entry point for the expensectl binary. Loads `.env`, sets up tracing and
//! dispatches to the requested subcommand.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "expensectl",
    author,
    version,
    about = "Expense tracking HTTP service backed by Postgres"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server (create, get, update and list expenses)
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // dotenvy doesn't overwrite existing vars, so real env wins over .env
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }
    Ok(())
}
