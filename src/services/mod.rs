//! Application services.

pub mod bot_driver;
pub mod strategy_sampler;

pub use bot_driver::{BotDriver, DriverReport};
pub use strategy_sampler::{choose_strategy, StrategySampler};
