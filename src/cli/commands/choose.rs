//! Implementation of the `nickbot choose` command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use crate::cli::output::{output, CommandOutput};
use crate::cli::table::TableFormatter;
use crate::domain::models::{SearchStrategy, StrategyTable, StrategyTally};
use crate::infrastructure::random::source_for_seed;
use crate::services::StrategySampler;

/// Draws listed individually in output; larger runs only report the tally.
const MAX_LISTED_DRAWS: u64 = 20;

/// Arguments for `nickbot choose`.
#[derive(Args, Debug)]
pub struct ChooseArgs {
    /// Number of independent draws
    #[arg(short = 'n', long, default_value = "1", value_parser = clap::value_parser!(u64).range(1..=10_000_000))]
    pub count: u64,

    /// Seed for reproducible draws (overrides driver.seed)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

/// Result of a `choose` run.
#[derive(Debug, Serialize)]
pub struct ChooseOutput {
    /// Number of draws made
    pub count: u64,
    /// Individual draws in order, empty for large runs
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub draws: Vec<SearchStrategy>,
    /// Draws per strategy
    pub tally: StrategyTally,
    #[serde(skip)]
    table: StrategyTable,
}

impl CommandOutput for ChooseOutput {
    fn to_human(&self) -> String {
        let tally = TableFormatter::new().format_tally(&self.tally, &self.table);
        match self.draws.as_slice() {
            [single] if self.count == 1 => single.to_string(),
            [] => tally,
            draws => {
                let mut out = String::new();
                for (index, strategy) in draws.iter().enumerate() {
                    out.push_str(&format!("{:>3}. {strategy}\n", index + 1));
                }
                out.push('\n');
                out.push_str(&tally);
                out
            }
        }
    }
}

/// Draw `args.count` strategies from `table` and print them.
pub fn execute(
    args: ChooseArgs,
    table: &StrategyTable,
    default_seed: Option<u64>,
    json_mode: bool,
) -> Result<()> {
    let sampler = StrategySampler::new(table, source_for_seed(args.seed.or(default_seed)));

    let mut tally = StrategyTally::new();
    let mut draws = Vec::new();
    for _ in 0..args.count {
        let strategy = sampler.choose();
        tally.record(strategy);
        if args.count <= MAX_LISTED_DRAWS {
            draws.push(strategy);
        }
    }

    tracing::debug!(count = args.count, "strategies drawn");

    output(
        &ChooseOutput {
            count: args.count,
            draws,
            tally,
            table: table.clone(),
        },
        json_mode,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output_for(draws: Vec<SearchStrategy>, count: u64) -> ChooseOutput {
        let table = StrategyTable::default();
        let tally = draws.iter().copied().collect();
        ChooseOutput {
            count,
            draws,
            tally,
            table,
        }
    }

    #[test]
    fn test_single_draw_prints_name_only() {
        let out = output_for(vec![SearchStrategy::ScoreUser], 1);
        assert_eq!(out.to_human(), "ScoreUser");
    }

    #[test]
    fn test_small_run_lists_draws_before_tally() {
        let out = output_for(
            vec![SearchStrategy::FacesGlobal, SearchStrategy::RandomUser],
            2,
        );
        let human = out.to_human();

        let first = human.find("  1. FacesGlobal").expect("first draw listed");
        let second = human.find("  2. RandomUser").expect("second draw listed");
        assert!(first < second);
        assert!(human.contains("ScoreGlobal"), "tally covers every strategy");
        assert!(human.find("ScoreGlobal").unwrap() > second);
    }

    #[test]
    fn test_large_run_prints_tally_only() {
        let mut out = output_for(Vec::new(), 0);
        out.count = 500;
        assert!(!out.to_human().contains("  1. "));
    }
}
