//! Draw counting.

use serde::Serialize;
use std::collections::BTreeMap;

use super::strategy::SearchStrategy;

/// Per-strategy draw counts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StrategyTally {
    counts: BTreeMap<SearchStrategy, u64>,
}

impl StrategyTally {
    /// Empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one draw of `strategy`.
    pub fn record(&mut self, strategy: SearchStrategy) {
        *self.counts.entry(strategy).or_default() += 1;
    }

    /// Draws recorded for `strategy`.
    pub fn count(&self, strategy: SearchStrategy) -> u64 {
        self.counts.get(&strategy).copied().unwrap_or(0)
    }

    /// Draws recorded overall.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Share of all recorded draws that went to `strategy`, in `[0, 1]`.
    #[allow(clippy::cast_precision_loss)]
    pub fn frequency(&self, strategy: SearchStrategy) -> f64 {
        match self.total() {
            0 => 0.0,
            total => self.count(strategy) as f64 / total as f64,
        }
    }

    /// Counts for every strategy in declaration order, including zeros.
    pub fn iter(&self) -> impl Iterator<Item = (SearchStrategy, u64)> + '_ {
        SearchStrategy::ALL
            .into_iter()
            .map(|strategy| (strategy, self.count(strategy)))
    }
}

impl FromIterator<SearchStrategy> for StrategyTally {
    fn from_iter<I: IntoIterator<Item = SearchStrategy>>(iter: I) -> Self {
        let mut tally = Self::new();
        for strategy in iter {
            tally.record(strategy);
        }
        tally
    }
}
