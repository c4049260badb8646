//! custctl CLI - customer record maintenance
//!
//! Thin operator front-end over `custctl-store`: each subcommand maps to one
//! store operation. The `customers` table must already exist.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use custctl_store::{create_pool, CustomerRepo, StoreConfig};
use tracing::debug;

mod commands;
mod tracing_setup;

use commands::CustomerCommand;
use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "custctl",
    author,
    version,
    about = "Query, create, update and delete customer records"
)]
struct Cli {
    /// Enable debug logging on stderr
    #[arg(long, global = true)]
    debug: bool,

    /// TOML file with database_url / max_connections / acquire_timeout_secs
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// SQLite connection URL (overrides config file)
    #[arg(long, global = true, env = "DATABASE_URL", value_name = "URL")]
    database_url: Option<String>,

    #[command(subcommand)]
    command: CustomerCommand,
}

impl Cli {
    fn store_config(&self) -> Result<StoreConfig> {
        let mut config = match &self.config {
            Some(path) => StoreConfig::load(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => StoreConfig::from_env(),
        };

        if let Some(url) = &self.database_url {
            config.database_url = url.clone();
        }
        Ok(config)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    let config = cli.store_config()?;
    debug!(database_url = %config.database_url, "connecting");

    let pool = create_pool(&config)
        .await
        .with_context(|| format!("failed to open database {}", config.database_url))?;
    let repo = CustomerRepo::new(pool.clone());

    let result = commands::run(&repo, cli.command).await;
    pool.close().await;
    result
}
