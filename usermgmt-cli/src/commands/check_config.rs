//! Validate database configuration without serving

use anyhow::{Context, Result};
use clap::Parser;

use usermgmt_server::db::create_pool;
use usermgmt_server::DbConfig;

/// Arguments for the check-config command
#[derive(Parser, Debug)]
pub struct CheckConfigArgs {
    /// Also open a connection to the database
    #[arg(long)]
    pub connect: bool,
}

/// Load the configuration, report it, and optionally connect.
pub async fn run_check_config(args: CheckConfigArgs) -> Result<()> {
    let db_config = DbConfig::from_env().context("Invalid database configuration")?;
    let options = db_config
        .connect_options()
        .context("Invalid database configuration")?;

    println!(
        "database: {}@{}:{}/{} (sslmode={})",
        db_config.user, db_config.host, db_config.port, db_config.name, db_config.sslmode
    );

    if args.connect {
        let pool = create_pool(options)
            .await
            .context("Failed to connect to database")?;
        pool.close().await;
        println!("connection: ok");
    }

    Ok(())
}
