//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::strategy_table::{StrategyTable, WeightedEntry, DEFAULT_ENTRIES};
use crate::domain::errors::StrategyTableError;

/// Main configuration structure for nickbot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Decision loop configuration
    #[serde(default)]
    pub driver: DriverConfig,

    /// Strategy weights, in bucket order
    #[serde(default = "default_strategies")]
    pub strategies: Vec<WeightedEntry>,
}

fn default_strategies() -> Vec<WeightedEntry> {
    DEFAULT_ENTRIES.to_vec()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            logging: LoggingConfig::default(),
            driver: DriverConfig::default(),
            strategies: default_strategies(),
        }
    }
}

impl Config {
    /// Build the strategy table described by this configuration.
    pub fn strategy_table(&self) -> Result<StrategyTable, StrategyTableError> {
        StrategyTable::new(self.strategies.clone())
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: json or pretty
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Directory for rolling log files (stdout only when unset)
    #[serde(default)]
    pub log_dir: Option<PathBuf>,

    /// File rotation: daily, hourly or never
    #[serde(default = "default_rotation")]
    pub rotation: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_rotation() -> String {
    "daily".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            log_dir: None,
            rotation: default_rotation(),
        }
    }
}

/// Decision loop configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DriverConfig {
    /// Seconds between decision cycles
    #[serde(default = "default_cycle_interval_secs")]
    pub cycle_interval_secs: u64,

    /// Stop after this many cycles (runs until interrupted when unset)
    #[serde(default)]
    pub max_cycles: Option<u64>,

    /// Seed for reproducible strategy sampling
    #[serde(default)]
    pub seed: Option<u64>,
}

const fn default_cycle_interval_secs() -> u64 {
    300
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            cycle_interval_secs: default_cycle_interval_secs(),
            max_cycles: None,
            seed: None,
        }
    }
}
