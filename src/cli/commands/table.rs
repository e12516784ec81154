//! Implementation of the `nickbot table` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::cli::table::TableFormatter;
use crate::domain::models::{Bucket, StrategyTable};

/// Arguments for `nickbot table`.
#[derive(Args, Debug)]
pub struct TableArgs {}

/// Active table, one bucket per strategy.
#[derive(Debug, Serialize)]
pub struct TableOutput {
    /// Buckets in table order
    pub buckets: Vec<Bucket>,
}

impl CommandOutput for TableOutput {
    fn to_human(&self) -> String {
        TableFormatter::new().format_buckets(&self.buckets)
    }
}

/// Print the active strategy table.
pub fn execute(_args: TableArgs, table: &StrategyTable, json_mode: bool) -> Result<()> {
    output(
        &TableOutput {
            buckets: table.buckets(),
        },
        json_mode,
    );
    Ok(())
}
