//! Implementation of the `nickbot config` commands.

use anyhow::{Context, Result};
use clap::Subcommand;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::domain::models::Config;

/// Subcommands of `nickbot config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Check that the configuration loads and the strategy weights are valid
    Validate,

    /// Print the effective configuration
    Show,
}

/// Result of `config validate`.
#[derive(Debug, Serialize)]
pub struct ValidateOutput {
    /// Always `true`; invalid configuration fails before the command runs
    pub valid: bool,
    /// Number of strategy entries
    pub strategies: usize,
    /// Effective cycle interval
    pub cycle_interval_secs: u64,
}

impl CommandOutput for ValidateOutput {
    fn to_human(&self) -> String {
        format!(
            "Configuration is valid: {} strategies, one cycle every {}s",
            self.strategies, self.cycle_interval_secs
        )
    }
}

/// Result of `config show`.
#[derive(Debug, Serialize)]
#[serde(transparent)]
pub struct ShowOutput {
    /// Effective configuration after merging every layer
    pub config: Config,
}

impl CommandOutput for ShowOutput {
    fn to_human(&self) -> String {
        serde_yaml::to_string(&self.config).unwrap_or_default()
    }
}

/// `config` has already been loaded and validated by the time this runs.
pub fn execute(command: ConfigCommands, config: &Config, json_mode: bool) -> Result<()> {
    match command {
        ConfigCommands::Validate => {
            let table = config.strategy_table().context("Invalid strategy table")?;
            output(
                &ValidateOutput {
                    valid: true,
                    strategies: table.len(),
                    cycle_interval_secs: config.driver.cycle_interval_secs,
                },
                json_mode,
            );
        }
        ConfigCommands::Show => output(
            &ShowOutput {
                config: config.clone(),
            },
            json_mode,
        ),
    }
    Ok(())
}
