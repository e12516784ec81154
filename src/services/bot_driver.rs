//! Decision-cycle driver.
//!
//! Each cycle draws one strategy from the sampler and hands it to the
//! executor. Executor failures are logged and counted, never retried; the
//! next cycle proceeds on schedule.

use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;
use tracing::{info, instrument, warn};

use crate::domain::models::{SearchStrategy, StrategyTally};
use crate::domain::ports::{RandomSource, StrategyExecutor};
use crate::services::strategy_sampler::StrategySampler;

/// Summary of a driver run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DriverReport {
    /// Cycles run
    pub cycles: u64,
    /// Cycles whose execution failed
    pub failures: u64,
    /// Whether the run ended on a shutdown signal rather than its cycle budget
    pub interrupted: bool,
    /// Strategies chosen
    pub tally: StrategyTally,
}

impl DriverReport {
    fn record(&mut self, strategy: SearchStrategy) {
        self.cycles += 1;
        self.tally.record(strategy);
    }
}

/// Runs decision cycles at a fixed interval.
pub struct BotDriver<'t, R, E> {
    sampler: StrategySampler<'t, R>,
    executor: E,
    interval: Duration,
    max_cycles: Option<u64>,
}

impl<'t, R, E> BotDriver<'t, R, E>
where
    R: RandomSource,
    E: StrategyExecutor,
{
    /// Driver running one cycle per `interval`, without a cycle budget.
    pub fn new(sampler: StrategySampler<'t, R>, executor: E, interval: Duration) -> Self {
        Self {
            sampler,
            executor,
            interval,
            max_cycles: None,
        }
    }

    /// Stop after `max_cycles` cycles. `None` runs until shutdown.
    #[must_use]
    pub fn with_max_cycles(mut self, max_cycles: Option<u64>) -> Self {
        self.max_cycles = max_cycles;
        self
    }

    /// Executor the driver hands strategies to.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Run cycles until the budget is spent or `shutdown` resolves.
    ///
    /// The first cycle starts immediately.
    #[instrument(skip_all, fields(interval_secs = self.interval.as_secs_f64(), max_cycles = ?self.max_cycles))]
    pub async fn run<F>(&self, shutdown: F) -> DriverReport
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        let mut report = DriverReport::default();
        info!("driver started");

        while self.max_cycles.map_or(true, |max| report.cycles < max) {
            tokio::select! {
                biased;
                () = &mut shutdown => {
                    info!(cycles = report.cycles, "shutdown requested");
                    report.interrupted = true;
                    break;
                }
                _ = ticker.tick() => {}
            }

            let strategy = self.sampler.choose();
            report.record(strategy);
            let cycle = report.cycles;

            info!(
                cycle,
                strategy = %strategy,
                criterion = %strategy.criterion(),
                scope = %strategy.scope(),
                "strategy chosen"
            );

            if let Err(err) = self.executor.execute(cycle, strategy).await {
                report.failures += 1;
                warn!(cycle, strategy = %strategy, error = %err, "strategy execution failed");
            }
        }

        info!(
            cycles = report.cycles,
            failures = report.failures,
            interrupted = report.interrupted,
            "driver stopped"
        );
        report
    }
}
