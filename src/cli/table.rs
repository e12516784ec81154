//! Table output formatting for CLI commands
//!
//! Renders strategy tables and draw tallies using comfy-table.

use comfy_table::{presets, Attribute, Cell, CellAlignment, ContentArrangement, Table};

use crate::domain::models::{Bucket, StrategyTable, StrategyTally};

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

impl TableFormatter {
    /// Formatter sized to the terminal.
    pub fn new() -> Self {
        Self { max_width: None }
    }

    /// Formatter capped at `max_width` columns.
    pub fn with_max_width(max_width: u16) -> Self {
        Self {
            max_width: Some(max_width),
        }
    }

    /// Format strategy buckets with the outcomes each one owns
    pub fn format_buckets(&self, buckets: &[Bucket]) -> String {
        let mut table = self.create_base_table();
        table.set_header(header(&["Strategy", "Criterion", "Scope", "Weight", "Outcomes"]));

        for bucket in buckets {
            table.add_row(vec![
                Cell::new(bucket.strategy),
                Cell::new(bucket.strategy.criterion()),
                Cell::new(bucket.strategy.scope()),
                Cell::new(format!("{}%", bucket.weight)).set_alignment(CellAlignment::Right),
                Cell::new(outcome_range(bucket)),
            ]);
        }

        table.to_string()
    }

    /// Format observed draw counts against the table's expected shares
    pub fn format_tally(&self, tally: &StrategyTally, table: &StrategyTable) -> String {
        let mut out = self.create_base_table();
        out.set_header(header(&["Strategy", "Draws", "Observed", "Expected"]));

        for (strategy, count) in tally.iter() {
            out.add_row(vec![
                Cell::new(strategy),
                Cell::new(count).set_alignment(CellAlignment::Right),
                Cell::new(format!("{:.1}%", tally.frequency(strategy) * 100.0))
                    .set_alignment(CellAlignment::Right),
                Cell::new(format!("{}%", table.weight_of(strategy)))
                    .set_alignment(CellAlignment::Right),
            ]);
        }

        out.to_string()
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        // Use UTF-8 preset for nice borders
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

fn header(titles: &[&str]) -> Vec<Cell> {
    titles
        .iter()
        .map(|title| Cell::new(title).add_attribute(Attribute::Bold))
        .collect()
}

fn outcome_range(bucket: &Bucket) -> String {
    match bucket.weight {
        0 => "-".to_string(),
        1 => bucket.start.to_string(),
        _ => format!("{}-{}", bucket.start, bucket.end - 1),
    }
}
