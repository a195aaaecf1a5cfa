//! Core domain types and logic.

pub mod series;
pub mod rolling;
pub mod weights;
pub mod stage;
pub mod pipeline;
pub mod metrics;
pub mod config_validation;
pub mod error;

pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;
