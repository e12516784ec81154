//! Port trait definitions (Hexagonal Architecture)
//!
//! This module defines the interfaces that infrastructure adapters implement:
//! - RandomSource: uniform outcomes for strategy sampling
//! - SocialSession: the authenticated social media session
//! - StrategyExecutor: acts on the strategy chosen for a cycle
//!
//! These traits keep the strategy core independent of any platform client.

pub mod random_source;
pub mod social_session;
pub mod strategy_executor;

pub use random_source::RandomSource;
pub use social_session::SocialSession;
pub use strategy_executor::StrategyExecutor;
