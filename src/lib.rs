//! nickbot - Social Media Bot
//!
//! nickbot runs decision cycles against a social media account. Every cycle
//! picks one search strategy (faces, likes, score or random, over a global
//! pool or one user's network) by a weighted draw from a validated strategy
//! table, and hands it to an executor.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain`): Strategy model, strategy table and ports
//! - **Service Layer** (`services`): Strategy sampling and the decision loop
//! - **Infrastructure Layer** (`infrastructure`): Config, logging, random sources and adapters
//! - **CLI Layer** (`cli`): Command-line interface
//!
//! # Example
//!
//! ```
//! use nickbot::{choose_strategy, SearchStrategy};
//!
//! let strategy = choose_strategy();
//! assert!(SearchStrategy::ALL.contains(&strategy));
//! ```

pub mod cli;
pub mod domain;
pub mod infrastructure;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::errors::{SessionError, StrategyParseError, StrategyTableError};
pub use domain::models::{
    Config, Criterion, Scope, SearchStrategy, StrategyTable, StrategyTally, WeightedEntry,
};
pub use domain::ports::{RandomSource, SocialSession, StrategyExecutor};
pub use infrastructure::config::{ConfigError, ConfigLoader};
pub use services::{choose_strategy, BotDriver, DriverReport, StrategySampler};
