//! Result export port trait.

use crate::domain::error::RiskfoldError;
use crate::domain::pipeline::PortfolioResult;

/// Port for writing the shaped return stream and equity curve.
pub trait ReportPort {
    fn write(&self, result: &PortfolioResult, output_path: &str) -> Result<(), RiskfoldError>;
}
