//! Hierarchical configuration loading and validation.

use anyhow::{Context, Result};
use figment::providers::{Env, Format, Serialized, Yaml};
use figment::Figment;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::errors::StrategyTableError;
use crate::domain::models::config::Config;

/// Project configuration directory, relative to the working directory.
pub const CONFIG_DIR: &str = ".nickbot";

/// Configuration error types
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Unknown tracing level
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Unknown console format
    #[error("Invalid log format: {0}. Must be one of: json, pretty")]
    InvalidLogFormat(String),

    /// Unknown rotation policy
    #[error("Invalid log rotation: {0}. Must be one of: daily, hourly, never")]
    InvalidLogRotation(String),

    /// Zero cycle interval
    #[error("Invalid cycle_interval_secs: {0}. Must be at least 1")]
    InvalidCycleInterval(u64),

    /// Zero cycle budget
    #[error("Invalid max_cycles: {0}. Must be at least 1")]
    InvalidMaxCycles(u64),

    /// Explicitly named file is missing
    #[error("Configuration file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Configured weights do not form a valid table
    #[error("Invalid strategy table")]
    StrategyTable(#[from] StrategyTableError),
}

/// Configuration loader with hierarchical merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with hierarchical merging
    ///
    /// Precedence (lowest to highest):
    /// 1. Programmatic defaults (Serialized)
    /// 2. .nickbot/config.yaml (project config)
    /// 3. .nickbot/local.yaml (project local overrides, optional)
    /// 4. Environment variables (NICKBOT_* prefix, highest priority)
    pub fn load() -> Result<Config> {
        let config_dir = Path::new(CONFIG_DIR);
        let config: Config = Self::figment(&[
            config_dir.join("config.yaml").as_path(),
            config_dir.join("local.yaml").as_path(),
        ])
        .extract()
        .context("Failed to extract configuration from figment")?;

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a specific file, still honouring
    /// environment overrides
    ///
    /// Unlike the project files searched by [`ConfigLoader::load`], an
    /// explicitly named file must exist.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()).into());
        }

        let config: Config = Self::figment(&[path])
            .extract()
            .with_context(|| format!("Failed to load config from {}", path.display()))?;

        Self::validate(&config)?;
        Ok(config)
    }

    fn figment(files: &[&Path]) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        for file in files {
            figment = figment.merge(Yaml::file(file));
        }
        figment.merge(Env::prefixed("NICKBOT_").split("__"))
    }

    /// Validate configuration after loading
    pub fn validate(config: &Config) -> Result<(), ConfigError> {
        // Validate logging config
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&config.logging.level.as_str()) {
            return Err(ConfigError::InvalidLogLevel(config.logging.level.clone()));
        }

        let valid_log_formats = ["json", "pretty"];
        if !valid_log_formats.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::InvalidLogFormat(config.logging.format.clone()));
        }

        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&config.logging.rotation.as_str()) {
            return Err(ConfigError::InvalidLogRotation(
                config.logging.rotation.clone(),
            ));
        }

        // Validate driver config
        if config.driver.cycle_interval_secs == 0 {
            return Err(ConfigError::InvalidCycleInterval(
                config.driver.cycle_interval_secs,
            ));
        }

        if config.driver.max_cycles == Some(0) {
            return Err(ConfigError::InvalidMaxCycles(0));
        }

        // Validate strategy weights
        config.strategy_table()?;

        Ok(())
    }
}
