//! Domain models.

pub mod config;
pub mod social;
pub mod strategy;
pub mod strategy_table;
pub mod tally;

pub use config::{Config, DriverConfig, LoggingConfig};
pub use social::{largest_candidate, ImageCandidate, Media, User, UserDetails};
pub use strategy::{Criterion, Scope, SearchStrategy, INVALID_STRATEGY_NAME};
pub use strategy_table::{Bucket, StrategyTable, WeightedEntry, DEFAULT_ENTRIES, TOTAL_WEIGHT};
pub use tally::StrategyTally;
