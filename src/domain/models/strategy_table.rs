//! Weighted strategy table.
//!
//! The table assigns every [`SearchStrategy`] an integer weight; the weights
//! form a percentage distribution. Sampling maps an outcome in `[0, 100)` onto
//! the entries by cumulative weight, so entry *i* owns the half-open interval
//! `[cum(i-1), cum(i))` and therefore exactly `weight_i` outcomes.
//!
//! One table is published per process through [`StrategyTable::install`] or,
//! when nothing is installed, lazily from the built-in distribution on the
//! first call to [`StrategyTable::global`].

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::ops::Range;
use std::sync::OnceLock;

use super::strategy::SearchStrategy;
use crate::domain::errors::StrategyTableError;

/// Number of equally likely outcomes a draw is made from.
pub const TOTAL_WEIGHT: u8 = 100;

/// One row of the strategy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEntry {
    /// Share of draws, in percent
    pub weight: u8,
    /// Strategy the weight applies to
    pub strategy: SearchStrategy,
}

impl WeightedEntry {
    /// Pair a weight with its strategy.
    pub const fn new(weight: u8, strategy: SearchStrategy) -> Self {
        Self { weight, strategy }
    }
}

/// Built-in distribution used when no table is configured.
pub const DEFAULT_ENTRIES: [WeightedEntry; 8] = [
    WeightedEntry::new(10, SearchStrategy::FacesGlobal),
    WeightedEntry::new(10, SearchStrategy::LikesGlobal),
    WeightedEntry::new(10, SearchStrategy::ScoreGlobal),
    WeightedEntry::new(5, SearchStrategy::RandomGlobal),
    WeightedEntry::new(20, SearchStrategy::FacesUser),
    WeightedEntry::new(20, SearchStrategy::LikesUser),
    WeightedEntry::new(20, SearchStrategy::ScoreUser),
    WeightedEntry::new(5, SearchStrategy::RandomUser),
];

const fn sum_weights(entries: &[WeightedEntry]) -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < entries.len() {
        total += entries[i].weight as u32;
        i += 1;
    }
    total
}

const _: () = assert!(
    sum_weights(&DEFAULT_ENTRIES) == TOTAL_WEIGHT as u32,
    "built-in strategy weights must total 100"
);

static GLOBAL_TABLE: OnceLock<StrategyTable> = OnceLock::new();

/// Outcome interval owned by one entry, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    /// Strategy returned for outcomes in this bucket
    pub strategy: SearchStrategy,
    /// Number of outcomes owned
    pub weight: u8,
    /// First outcome owned (inclusive)
    pub start: u8,
    /// End of the owned range (exclusive)
    pub end: u8,
}

impl Bucket {
    /// Outcomes owned, as a half-open range.
    pub fn range(&self) -> Range<u8> {
        self.start..self.end
    }
}

/// Validated, immutable strategy distribution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct StrategyTable {
    entries: Vec<WeightedEntry>,
}

impl StrategyTable {
    /// Validate `entries` and build a table.
    ///
    /// Fails when a weight exceeds 100, a strategy is listed twice or not at
    /// all, or the weights do not total exactly 100.
    pub fn new(entries: Vec<WeightedEntry>) -> Result<Self, StrategyTableError> {
        let mut seen = HashSet::with_capacity(entries.len());
        for entry in &entries {
            if entry.weight > TOTAL_WEIGHT {
                return Err(StrategyTableError::WeightOutOfRange {
                    strategy: entry.strategy,
                    weight: entry.weight,
                });
            }
            if !seen.insert(entry.strategy) {
                return Err(StrategyTableError::DuplicateStrategy(entry.strategy));
            }
        }

        if let Some(missing) = SearchStrategy::ALL.into_iter().find(|s| !seen.contains(s)) {
            return Err(StrategyTableError::MissingStrategy(missing));
        }

        let total = sum_weights(&entries);
        if total != u32::from(TOTAL_WEIGHT) {
            return Err(StrategyTableError::WeightSum {
                total,
                expected: u32::from(TOTAL_WEIGHT),
            });
        }

        Ok(Self { entries })
    }

    /// Publish `table` as the process-wide table.
    ///
    /// Only the first publication wins; later calls, or a call made after
    /// [`StrategyTable::global`] already fell back to the default, fail with
    /// [`StrategyTableError::AlreadyInstalled`].
    pub fn install(table: Self) -> Result<&'static Self, StrategyTableError> {
        let mut installed = false;
        let stored = GLOBAL_TABLE.get_or_init(|| {
            installed = true;
            table
        });

        if installed {
            tracing::debug!(entries = stored.len(), "strategy table installed");
            Ok(stored)
        } else {
            Err(StrategyTableError::AlreadyInstalled)
        }
    }

    /// The process-wide table.
    pub fn global() -> &'static Self {
        GLOBAL_TABLE.get_or_init(Self::default)
    }

    /// Entries in table order.
    pub fn entries(&self) -> &[WeightedEntry] {
        &self.entries
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always `false` for a validated table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Weight assigned to `strategy`.
    pub fn weight_of(&self, strategy: SearchStrategy) -> u8 {
        self.entries
            .iter()
            .find(|entry| entry.strategy == strategy)
            .map_or(0, |entry| entry.weight)
    }

    /// Strategy owning `outcome`.
    ///
    /// # Panics
    ///
    /// Panics if `outcome` is not below [`TOTAL_WEIGHT`]. A validated table
    /// covers every outcome in range, so falling off the end is a defect.
    pub fn lookup(&self, outcome: u8) -> SearchStrategy {
        let mut running_total: u32 = 0;
        for entry in &self.entries {
            running_total += u32::from(entry.weight);
            if u32::from(outcome) < running_total {
                return entry.strategy;
            }
        }

        unreachable!(
            "outcome {outcome} not covered by strategy table totalling {running_total}"
        )
    }

    /// Outcome interval of every entry, in table order.
    pub fn buckets(&self) -> Vec<Bucket> {
        let mut start = 0u8;
        self.entries
            .iter()
            .map(|entry| {
                let bucket = Bucket {
                    strategy: entry.strategy,
                    weight: entry.weight,
                    start,
                    end: start + entry.weight,
                };
                start = bucket.end;
                bucket
            })
            .collect()
    }
}

impl Default for StrategyTable {
    fn default() -> Self {
        Self::new(DEFAULT_ENTRIES.to_vec())
            .unwrap_or_else(|err| panic!("built-in strategy table is invalid: {err}"))
    }
}

impl TryFrom<Vec<WeightedEntry>> for StrategyTable {
    type Error = StrategyTableError;

    fn try_from(entries: Vec<WeightedEntry>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use SearchStrategy::*;

    fn with_weights(weights: [u8; 8]) -> Vec<WeightedEntry> {
        weights
            .into_iter()
            .zip(SearchStrategy::ALL)
            .map(|(weight, strategy)| WeightedEntry::new(weight, strategy))
            .collect()
    }

    #[test]
    fn test_default_table_is_valid() {
        let table = StrategyTable::default();
        assert_eq!(table.len(), 8);
        assert_eq!(table.weight_of(FacesUser), 20);
        assert_eq!(table.weight_of(RandomGlobal), 5);
    }

    #[test]
    fn test_sum_of_99_rejected() {
        let result = StrategyTable::new(with_weights([10, 10, 10, 4, 20, 20, 20, 5]));
        assert_eq!(
            result.unwrap_err(),
            StrategyTableError::WeightSum {
                total: 99,
                expected: 100
            }
        );
    }

    #[test]
    fn test_sum_of_101_rejected() {
        let result = StrategyTable::new(with_weights([10, 10, 10, 6, 20, 20, 20, 5]));
        assert!(matches!(
            result,
            Err(StrategyTableError::WeightSum { total: 101, .. })
        ));
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut entries = with_weights([10, 10, 10, 5, 20, 20, 20, 5]);
        entries[7].strategy = FacesGlobal;
        assert_eq!(
            StrategyTable::new(entries).unwrap_err(),
            StrategyTableError::DuplicateStrategy(FacesGlobal)
        );
    }

    #[test]
    fn test_missing_rejected() {
        let mut entries = with_weights([10, 10, 10, 5, 20, 20, 20, 5]);
        entries.pop();
        entries[0].weight = 15;
        assert_eq!(
            StrategyTable::new(entries).unwrap_err(),
            StrategyTableError::MissingStrategy(RandomUser)
        );
    }

    #[test]
    fn test_weight_over_100_rejected() {
        let entries = with_weights([101, 0, 0, 0, 0, 0, 0, 0]);
        assert!(matches!(
            StrategyTable::new(entries),
            Err(StrategyTableError::WeightOutOfRange { weight: 101, .. })
        ));
    }

    #[test]
    fn test_zero_weight_entry_owns_nothing() {
        let table = StrategyTable::new(with_weights([0, 100, 0, 0, 0, 0, 0, 0])).unwrap();
        assert!((0..TOTAL_WEIGHT).all(|r| table.lookup(r) == LikesGlobal));
    }

    #[test]
    fn test_lookup_boundaries() {
        let table = StrategyTable::default();
        let cases = [
            (0, FacesGlobal),
            (9, FacesGlobal),
            (10, LikesGlobal),
            (29, ScoreGlobal),
            (30, RandomGlobal),
            (34, RandomGlobal),
            (35, FacesUser),
            (99, RandomUser),
        ];
        for (outcome, expected) in cases {
            assert_eq!(table.lookup(outcome), expected, "outcome {outcome}");
        }
    }

    #[test]
    #[should_panic(expected = "not covered")]
    fn test_lookup_out_of_range_panics() {
        StrategyTable::default().lookup(100);
    }

    #[test]
    fn test_buckets_partition_outcomes() {
        let buckets = StrategyTable::default().buckets();
        assert_eq!(buckets.first().map(|b| b.start), Some(0));
        assert_eq!(buckets.last().map(|b| b.end), Some(TOTAL_WEIGHT));
        for pair in buckets.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
        }
        assert_eq!(buckets[3].range(), 30..35);
    }

    #[test]
    fn test_serializes_as_entry_list() {
        let json = serde_json::to_value(StrategyTable::default()).unwrap();
        assert_eq!(json[0]["weight"], 10);
        assert_eq!(json[0]["strategy"], "faces_global");
    }
}
