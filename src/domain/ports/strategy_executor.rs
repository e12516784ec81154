//! Port for acting on a chosen strategy.

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::models::SearchStrategy;

/// Port for acting on the strategy chosen by a decision cycle
///
/// The driver loop calls [`execute`](StrategyExecutor::execute) once per
/// cycle. A failed execution is reported back to the driver, which logs it
/// and moves on to the next cycle.
#[async_trait]
pub trait StrategyExecutor: Send + Sync {
    /// Carry out one cycle using `strategy`
    async fn execute(&self, cycle: u64, strategy: SearchStrategy) -> Result<()>;
}
