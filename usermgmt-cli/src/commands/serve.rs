//! HTTP server command

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use usermgmt_server::db::{create_pool_with_options, PoolConfig};
use usermgmt_server::{run_server, AppState, DbConfig, PgUserRepo, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', env = "USERMGMT_BIND", default_value = "0.0.0.0:8080")]
    pub bind: SocketAddr,

    /// Seconds in-flight requests may run after a shutdown signal
    #[arg(long, default_value = "10")]
    pub shutdown_grace: u64,

    /// Maximum open (and idle) database connections
    #[arg(long, default_value = "25")]
    pub max_connections: u32,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = DbConfig::from_env().context("Invalid database configuration")?;
    let options = db_config
        .connect_options()
        .context("Invalid database configuration")?;

    tracing::info!(
        host = %db_config.host,
        port = %db_config.port,
        database = %db_config.name,
        "Connecting to database"
    );

    let pool_config = PoolConfig {
        max_connections: args.max_connections,
        ..PoolConfig::default()
    };
    let pool = create_pool_with_options(options, &pool_config)
        .await
        .context("Failed to create database pool")?;

    let state = AppState::new(Arc::new(PgUserRepo::new(pool.clone())));
    let config = ServerConfig {
        bind_addr: args.bind,
        shutdown_grace: Duration::from_secs(args.shutdown_grace),
    };

    // Run server (blocks until shutdown)
    run_server(state, config).await.context("Server error")?;

    pool.close().await;
    Ok(())
}
