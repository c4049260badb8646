//! Tracing setup for the custctl CLI
//!
//! Usage:
//!   custctl --debug ...               # Store statements and pool events on stderr
//!   RUST_LOG=custctl_store=trace ...  # Fine-grained log control
//!
//! Logs always go to stderr so stdout stays clean JSON.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

/// sqlx logs every statement at info; keep it quiet unless asked.
const DEFAULT_DIRECTIVES: &str = "warn,custctl=info,custctl_store=info";

const DEBUG_DIRECTIVES: &str = "info,custctl=debug,custctl_store=debug";

/// Tracing configuration options
#[derive(Debug, Clone, Default)]
pub struct TracingConfig {
    /// Raise custctl and store logging to debug (RUST_LOG still wins)
    pub debug: bool,
}

impl TracingConfig {
    fn directives(&self) -> &'static str {
        if self.debug {
            DEBUG_DIRECTIVES
        } else {
            DEFAULT_DIRECTIVES
        }
    }
}

/// Initialize console tracing
pub fn init_tracing(config: &TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.directives()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(config.debug)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
