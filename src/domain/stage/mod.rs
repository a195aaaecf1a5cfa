//! Path-dependent exposure adjustment stages, applied in pipeline order:
//! drawdown response, volatility targeting, regime detection,
//! loss-asymmetry dampening, trading frictions.

pub mod drawdown;
pub mod vol_target;
pub mod regime;
pub mod dampener;
pub mod costs;
