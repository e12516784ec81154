//! CLI type definitions
//!
//! This module contains clap command structures that define the CLI interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::commands::{choose::ChooseArgs, config::ConfigCommands, run::RunArgs, table::TableArgs};

/// Top-level command line.
#[derive(Parser)]
#[command(name = "nickbot")]
#[command(about = "nickbot - social media bot with weighted strategy selection", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to run
    #[command(subcommand)]
    pub command: Commands,

    /// Output in JSON format
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Configuration file to load instead of .nickbot/config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show the active strategy table
    Table(TableArgs),

    /// Draw strategies from the active table
    Choose(ChooseArgs),

    /// Run the decision loop without touching any platform
    Run(RunArgs),

    /// Configuration commands
    #[command(subcommand)]
    Config(ConfigCommands),
}
