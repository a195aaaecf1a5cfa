//! CSV result export adapter.
//!
//! Writes the final portfolio return stream and equity curve as a flat
//! `date,portfolio_return,equity` table.

use crate::domain::error::RiskfoldError;
use crate::domain::pipeline::PortfolioResult;
use crate::ports::report_port::ReportPort;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct ReportRow {
    date: String,
    portfolio_return: f64,
    equity: f64,
}

pub struct CsvReportAdapter;

impl ReportPort for CsvReportAdapter {
    fn write(&self, result: &PortfolioResult, output_path: &str) -> Result<(), RiskfoldError> {
        let mut wtr = csv::Writer::from_path(output_path).map_err(|e| RiskfoldError::Data {
            reason: format!("failed to open {}: {}", output_path, e),
        })?;

        for i in 0..result.returns.len() {
            wtr.serialize(ReportRow {
                date: result.dates[i].format("%Y-%m-%d").to_string(),
                portfolio_return: result.returns[i],
                equity: result.equity[i],
            })
            .map_err(|e| RiskfoldError::Data {
                reason: format!("CSV write error: {}", e),
            })?;
        }

        wtr.flush()?;
        Ok(())
    }
}
