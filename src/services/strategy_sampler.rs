//! Weighted strategy sampling.

use crate::domain::models::{SearchStrategy, StrategyTable, TOTAL_WEIGHT};
use crate::domain::ports::RandomSource;
use crate::infrastructure::random::ThreadRandom;

/// Weighted draw over a [`StrategyTable`]
///
/// Each call to [`choose`](Self::choose) is an independent trial: one outcome
/// is drawn uniformly from `[0, 100)` and mapped onto the table by cumulative
/// weight. The sampler holds no state between calls and only reads the table,
/// so it can be shared freely as long as its random source can.
#[derive(Debug, Clone)]
pub struct StrategySampler<'t, R> {
    table: &'t StrategyTable,
    source: R,
}

impl<'t, R: RandomSource> StrategySampler<'t, R> {
    /// Sampler over `table` drawing from `source`.
    pub fn new(table: &'t StrategyTable, source: R) -> Self {
        Self { table, source }
    }

    /// Draw one strategy.
    pub fn choose(&self) -> SearchStrategy {
        let outcome = self.source.draw(TOTAL_WEIGHT);
        self.table.lookup(outcome)
    }

    /// Table being sampled.
    pub fn table(&self) -> &'t StrategyTable {
        self.table
    }
}

impl StrategySampler<'static, ThreadRandom> {
    /// Sampler over the process-wide table using the thread-local generator.
    pub fn global() -> Self {
        Self::new(StrategyTable::global(), ThreadRandom)
    }
}

/// Choose the strategy for the next decision cycle.
pub fn choose_strategy() -> SearchStrategy {
    StrategySampler::global().choose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::WeightedEntry;
    use crate::infrastructure::random::SeededRandom;
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicU8, Ordering};

    struct FixedOutcome(u8);

    impl RandomSource for FixedOutcome {
        fn draw(&self, upper: u8) -> u8 {
            assert_eq!(upper, TOTAL_WEIGHT);
            self.0
        }
    }

    /// Cycles through 0..100 on successive draws.
    struct Sweep(AtomicU8);

    impl RandomSource for Sweep {
        fn draw(&self, upper: u8) -> u8 {
            self.0.fetch_add(1, Ordering::Relaxed) % upper
        }
    }

    #[test]
    fn test_concrete_scenario() {
        let table = StrategyTable::default();
        let cases = [
            (0, SearchStrategy::FacesGlobal),
            (9, SearchStrategy::FacesGlobal),
            (10, SearchStrategy::LikesGlobal),
            (29, SearchStrategy::ScoreGlobal),
            (30, SearchStrategy::RandomGlobal),
            (34, SearchStrategy::RandomGlobal),
            (35, SearchStrategy::FacesUser),
            (99, SearchStrategy::RandomUser),
        ];

        for (outcome, expected) in cases {
            let sampler = StrategySampler::new(&table, FixedOutcome(outcome));
            assert_eq!(sampler.choose(), expected, "outcome {outcome}");
        }
    }

    #[test]
    fn test_fixed_outcome_is_deterministic() {
        let table = StrategyTable::default();
        let sampler = StrategySampler::new(&table, FixedOutcome(57));
        let chosen: HashSet<_> = (0..50).map(|_| sampler.choose()).collect();
        assert_eq!(chosen.len(), 1);
    }

    #[test]
    fn test_sweep_matches_weights_exactly() {
        let table = StrategyTable::default();
        let sampler = StrategySampler::new(&table, Sweep(AtomicU8::new(0)));

        let mut counts = std::collections::HashMap::new();
        for _ in 0..TOTAL_WEIGHT {
            *counts.entry(sampler.choose()).or_insert(0u8) += 1;
        }

        for WeightedEntry { weight, strategy } in table.entries() {
            assert_eq!(counts.get(strategy).copied().unwrap_or(0), *weight, "{strategy}");
        }
    }

    #[test]
    fn test_seeded_sampler_reproducible() {
        let table = StrategyTable::default();
        let first = StrategySampler::new(&table, SeededRandom::new(7));
        let second = StrategySampler::new(&table, SeededRandom::new(7));

        let a: Vec<_> = (0..100).map(|_| first.choose()).collect();
        let b: Vec<_> = (0..100).map(|_| second.choose()).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn test_choose_strategy_returns_known_variant() {
        let strategy = choose_strategy();
        assert!(SearchStrategy::ALL.contains(&strategy));
    }
}
