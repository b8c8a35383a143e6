//! usermgmt - HTTP service for the users resource
//!
//! Loads `.env`, initialises tracing, reads database settings from the
//! environment and serves the users API until Ctrl+C or SIGTERM.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "usermgmt",
    author,
    version,
    about = "CRUD HTTP service for users backed by Postgres"
)]
struct Cli {
    /// Debug-level logging (unless RUST_LOG is set)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Serve the users API
    Serve(commands::serve::ServeArgs),
    /// Validate DB_* settings (and optionally connect)
    CheckConfig(commands::check_config::CheckConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // .env first, so a RUST_LOG in it reaches the subscriber
    let dotenv = config::load_dotenv();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    dotenv.log();

    match cli.command {
        Commands::Serve(args) => commands::serve::run_serve(args).await?,
        Commands::CheckConfig(args) => commands::check_config::run_check_config(args).await?,
    }

    Ok(())
}
