//! Implementation of the `nickbot run` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::time::Duration;
use tracing::warn;

use crate::cli::output::{output, CommandOutput};
use crate::cli::table::TableFormatter;
use crate::domain::models::{DriverConfig, StrategyTable};
use crate::infrastructure::executor::DryRunExecutor;
use crate::infrastructure::random::source_for_seed;
use crate::services::{BotDriver, DriverReport, StrategySampler};

/// Arguments for `nickbot run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Stop after this many cycles (overrides driver.max_cycles)
    #[arg(short = 'n', long, value_parser = clap::value_parser!(u64).range(1..))]
    pub cycles: Option<u64>,

    /// Seconds between cycles (overrides driver.cycle_interval_secs)
    #[arg(short, long, value_parser = clap::value_parser!(u64).range(1..))]
    pub interval: Option<u64>,

    /// Seed for reproducible sampling (overrides driver.seed)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Result of a `run`.
#[derive(Debug, Serialize)]
pub struct RunOutput {
    /// Driver summary
    #[serde(flatten)]
    pub report: DriverReport,
    #[serde(skip)]
    table: StrategyTable,
}

impl CommandOutput for RunOutput {
    fn to_human(&self) -> String {
        let status = if self.report.interrupted {
            "interrupted"
        } else {
            "completed"
        };
        format!(
            "Run {status}: {} cycle(s), {} failure(s)\n{}",
            self.report.cycles,
            self.report.failures,
            TableFormatter::new().format_tally(&self.report.tally, &self.table)
        )
    }
}

/// Run the dry-run decision loop until the cycle budget or Ctrl-C.
pub async fn execute(
    args: RunArgs,
    table: &StrategyTable,
    settings: &DriverConfig,
    json_mode: bool,
) -> Result<()> {
    let interval = Duration::from_secs(args.interval.unwrap_or(settings.cycle_interval_secs));
    let sampler = StrategySampler::new(table, source_for_seed(args.seed.or(settings.seed)));

    let driver = BotDriver::new(sampler, DryRunExecutor::new(), interval)
        .with_max_cycles(args.cycles.or(settings.max_cycles));
    let report = driver.run(shutdown_signal()).await;

    output(
        &RunOutput {
            report,
            table: table.clone(),
        },
        json_mode,
    );
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "cannot listen for ctrl-c; run until the cycle budget is spent");
        std::future::pending::<()>().await;
    }
}
