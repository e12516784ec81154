//! Strategy executor that records choices without contacting any platform.

use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Mutex, PoisonError};
use tracing::debug;

use crate::domain::models::SearchStrategy;
use crate::domain::ports::StrategyExecutor;

/// Records every `(cycle, strategy)` pair it is asked to execute.
#[derive(Debug, Default)]
pub struct DryRunExecutor {
    executed: Mutex<Vec<(u64, SearchStrategy)>>,
}

impl DryRunExecutor {
    /// Executor with nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Executions recorded so far, in cycle order.
    pub fn executed(&self) -> Vec<(u64, SearchStrategy)> {
        self.executed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl StrategyExecutor for DryRunExecutor {
    async fn execute(&self, cycle: u64, strategy: SearchStrategy) -> Result<()> {
        debug!(cycle, strategy = %strategy, "dry run: skipping platform calls");
        self.executed
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((cycle, strategy));
        Ok(())
    }
}
