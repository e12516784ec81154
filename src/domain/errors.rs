//! Domain errors for the nickbot strategy core and its collaborators.

use thiserror::Error;

use super::models::strategy::SearchStrategy;

/// Errors raised while building a strategy table.
///
/// Every variant is a configuration error: a table that fails to build must
/// stop the process before any strategy is sampled.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StrategyTableError {
    /// Weights do not add up to the number of outcomes
    #[error("strategy weights sum to {total}, expected {expected}")]
    WeightSum {
        /// Sum of the configured weights
        total: u32,
        /// Required sum
        expected: u32,
    },

    /// A single weight exceeds the number of outcomes
    #[error("weight {weight} for {strategy} is out of range (0-100)")]
    WeightOutOfRange {
        /// Strategy carrying the weight
        strategy: SearchStrategy,
        /// Offending weight
        weight: u8,
    },

    /// Listed twice
    #[error("strategy {0} appears more than once")]
    DuplicateStrategy(SearchStrategy),

    /// Not listed at all
    #[error("strategy {0} has no entry")]
    MissingStrategy(SearchStrategy),

    /// `install` was called after a table was already published
    #[error("a process-wide strategy table has already been installed")]
    AlreadyInstalled,
}

/// Error returned when a strategy name is not recognised.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid strategy: {0}")]
pub struct StrategyParseError(pub String);

/// Errors surfaced by a social media session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Login rejected or session already closed
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// The platform could not be reached
    #[error("Transport error: {0}")]
    Transport(String),

    /// The platform answered with a status other than `ok`
    #[error("invalid response status: {0}")]
    InvalidResponseStatus(String),

    /// A media URL could not be parsed
    #[error("Invalid media URL {url}: {reason}")]
    InvalidUrl {
        /// URL as received
        url: String,
        /// Parser message
        reason: String,
    },

    /// No user with this id
    #[error("User not found: {0}")]
    NotFound(i64),
}

/// Result of a session call.
pub type SessionResult<T> = Result<T, SessionError>;
