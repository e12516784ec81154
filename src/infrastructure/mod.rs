//! Infrastructure layer module
//!
//! This module contains all infrastructure adapters and external integrations:
//! - Configuration management
//! - Logging infrastructure
//! - Random sources for strategy sampling
//! - Strategy executors
//! - Social media session adapters
//!
//! Infrastructure implementations satisfy the port traits defined in the domain layer.

pub mod config;
pub mod executor;
pub mod logging;
pub mod random;
pub mod session;
