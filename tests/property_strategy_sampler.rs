use nickbot::domain::models::TOTAL_WEIGHT;
use nickbot::{RandomSource, SearchStrategy, StrategySampler, StrategyTable, StrategyTableError, WeightedEntry};
use proptest::prelude::*;
use std::collections::HashMap;

struct FixedOutcome(u8);

impl RandomSource for FixedOutcome {
    fn draw(&self, _upper: u8) -> u8 {
        self.0
    }
}

/// Valid tables: random cut points over 0..=100 give weights summing to 100,
/// assigned to the strategies in a random order.
fn valid_entries() -> impl Strategy<Value = Vec<WeightedEntry>> {
    (
        proptest::collection::vec(0u8..=TOTAL_WEIGHT, 7),
        Just(SearchStrategy::ALL.to_vec()).prop_shuffle(),
    )
        .prop_map(|(mut cuts, strategies)| {
            cuts.sort_unstable();
            cuts.insert(0, 0);
            cuts.push(TOTAL_WEIGHT);
            cuts.windows(2)
                .zip(strategies)
                .map(|(pair, strategy)| WeightedEntry::new(pair[1] - pair[0], strategy))
                .collect()
        })
}

proptest! {
    /// Property: every outcome is owned by exactly one entry, and each entry
    /// owns exactly as many outcomes as its weight.
    #[test]
    fn prop_outcomes_partitioned_by_weight(entries in valid_entries()) {
        let table = StrategyTable::new(entries.clone()).unwrap();

        let mut owned: HashMap<SearchStrategy, u8> = HashMap::new();
        for outcome in 0..TOTAL_WEIGHT {
            *owned.entry(table.lookup(outcome)).or_default() += 1;
        }

        for entry in &entries {
            prop_assert_eq!(
                owned.get(&entry.strategy).copied().unwrap_or(0),
                entry.weight,
                "{} should own {} outcomes",
                entry.strategy,
                entry.weight
            );
        }
    }

    /// Property: owners appear in table order as the outcome grows.
    #[test]
    fn prop_lookup_follows_table_order(entries in valid_entries()) {
        let table = StrategyTable::new(entries.clone()).unwrap();
        let position = |strategy: SearchStrategy| {
            entries.iter().position(|e| e.strategy == strategy).unwrap()
        };

        for outcome in 1..TOTAL_WEIGHT {
            prop_assert!(position(table.lookup(outcome - 1)) <= position(table.lookup(outcome)));
        }
    }

    /// Property: a fixed outcome always yields the same strategy.
    #[test]
    fn prop_fixed_outcome_deterministic(entries in valid_entries(), outcome in 0u8..TOTAL_WEIGHT) {
        let table = StrategyTable::new(entries).unwrap();
        let sampler = StrategySampler::new(&table, FixedOutcome(outcome));
        let first = sampler.choose();
        for _ in 0..10 {
            prop_assert_eq!(sampler.choose(), first);
        }
        prop_assert_eq!(first, table.lookup(outcome));
    }

    /// Property: shifting one unit of weight breaks the sum and the table is
    /// rejected at construction.
    #[test]
    fn prop_off_by_one_sums_rejected(
        entries in valid_entries(),
        index in 0usize..8,
        add in any::<bool>(),
    ) {
        let mut entries = entries;
        let expected_total = if add {
            prop_assume!(entries[index].weight < TOTAL_WEIGHT);
            entries[index].weight += 1;
            101
        } else {
            prop_assume!(entries[index].weight > 0);
            entries[index].weight -= 1;
            99
        };

        prop_assert_eq!(
            StrategyTable::new(entries),
            Err(StrategyTableError::WeightSum { total: expected_total, expected: 100 })
        );
    }
}
