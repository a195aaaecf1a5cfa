//! Return series access port trait.
//!
//! Per-asset strategy returns are produced by external collaborators
//! (signal generation and backtesting are out of the engine's scope);
//! this port hands them over already time-ordered and lookahead-free.

use crate::domain::error::RiskfoldError;
use crate::domain::series::AssetReturns;

pub trait ReturnsPort {
    fn fetch_returns(&self, asset: &str) -> Result<AssetReturns, RiskfoldError>;

    fn list_assets(&self) -> Result<Vec<String>, RiskfoldError>;
}
