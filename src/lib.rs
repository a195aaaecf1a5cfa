//! riskfold — portfolio risk-shaping engine.
//!
//! Turns independently generated per-asset strategy return streams into a
//! single risk-controlled portfolio return stream: risk-parity weighting,
//! drawdown response, volatility targeting, regime detection,
//! loss-asymmetry dampening and trading frictions, in one deterministic
//! batch pass over historical series.
//!
//! Hexagonal architecture: domain logic in [`domain`], port traits in
//! [`ports`], concrete implementations in [`adapters`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
