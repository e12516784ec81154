//! Domain layer for nickbot
//!
//! This module contains the strategy model, the weighted strategy table and
//! the ports that adapters and drivers plug into.

pub mod errors;
pub mod models;
pub mod ports;

// Re-export error types for convenient access
pub use errors::{SessionError, SessionResult, StrategyParseError, StrategyTableError};
