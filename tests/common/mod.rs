//! Common test utilities for integration tests

use nickbot::{SearchStrategy, StrategyTable, StrategyTally};

/// Setup test logging
///
/// Initializes tracing subscriber for test output.
/// Call this at the beginning of tests that need logging.
#[allow(dead_code)]
pub fn setup_test_logging() {
    use tracing_subscriber::fmt;

    let _ = fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

/// Pearson chi-squared statistic of `tally` against the table's weights.
///
/// Strategies with zero weight are skipped; they must have zero draws.
#[allow(dead_code, clippy::cast_precision_loss)]
pub fn chi_squared(tally: &StrategyTally, table: &StrategyTable) -> f64 {
    let total = tally.total() as f64;
    SearchStrategy::ALL
        .into_iter()
        .filter(|strategy| table.weight_of(*strategy) > 0)
        .map(|strategy| {
            let expected = total * f64::from(table.weight_of(strategy)) / 100.0;
            let observed = tally.count(strategy) as f64;
            (observed - expected).powi(2) / expected
        })
        .sum()
}

/// Critical value of chi-squared with 7 degrees of freedom at p = 0.001.
#[allow(dead_code)]
pub const CHI_SQUARED_7DF_P001: f64 = 24.322;
