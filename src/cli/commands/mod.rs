//! CLI command implementations.

pub mod choose;
pub mod config;
pub mod run;
pub mod table;
