//! Command-line interface.

pub mod commands;
pub mod output;
pub mod table;
pub mod types;

use anyhow::{Context, Result};

pub use types::{Cli, Commands};

use crate::domain::models::{Config, StrategyTable};
use crate::infrastructure::config::ConfigLoader;
use crate::infrastructure::logging::{LogConfig, LoggerImpl};

/// Process state established before any command runs.
pub struct Runtime {
    /// Validated configuration
    pub config: Config,
    /// Installed process-wide table
    pub table: &'static StrategyTable,
    _logger: LoggerImpl,
}

/// Load configuration, start logging and publish the strategy table.
///
/// Any failure here is fatal: no command runs against an unvalidated table.
pub fn bootstrap(cli: &Cli) -> Result<Runtime> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    let logger = LoggerImpl::init(&LogConfig::try_from(&config.logging)?)?;

    let table = StrategyTable::install(
        config
            .strategy_table()
            .context("Refusing to start with an invalid strategy table")?,
    )?;
    tracing::debug!(entries = table.len(), "strategy table ready");

    Ok(Runtime {
        config,
        table,
        _logger: logger,
    })
}

/// Report `err` and exit with a non-zero status.
pub fn handle_error(err: anyhow::Error, json_mode: bool) -> ! {
    if json_mode {
        let payload = serde_json::json!({
            "success": false,
            "error": format!("{err:#}"),
        });
        println!("{}", serde_json::to_string_pretty(&payload).unwrap_or_default());
    } else {
        eprintln!("Error: {err:#}");
    }
    std::process::exit(1);
}
