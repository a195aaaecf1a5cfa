//! CSV return series adapter.
//!
//! Reads one `<ASSET>.csv` file per asset from a base directory. Rows
//! are `date,return` with `%Y-%m-%d` dates; a header row is expected
//! and skipped.

use crate::domain::error::RiskfoldError;
use crate::domain::series::{AssetReturns, ReturnPoint};
use crate::ports::returns_port::ReturnsPort;
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;

pub struct CsvReturnsAdapter {
    base_path: PathBuf,
}

impl CsvReturnsAdapter {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    fn csv_path(&self, asset: &str) -> PathBuf {
        self.base_path.join(format!("{}.csv", asset))
    }
}

impl ReturnsPort for CsvReturnsAdapter {
    fn fetch_returns(&self, asset: &str) -> Result<AssetReturns, RiskfoldError> {
        let path = self.csv_path(asset);
        let content = fs::read_to_string(&path).map_err(|e| RiskfoldError::Data {
            reason: format!("failed to read {}: {}", path.display(), e),
        })?;

        let mut rdr = csv::Reader::from_reader(content.as_bytes());
        let mut points = Vec::new();

        for result in rdr.records() {
            let record = result.map_err(|e| RiskfoldError::Data {
                reason: format!("CSV parse error in {}: {}", path.display(), e),
            })?;

            let date_str = record.get(0).ok_or_else(|| RiskfoldError::Data {
                reason: "missing date column".into(),
            })?;
            let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
                RiskfoldError::Data {
                    reason: format!("invalid date format: {}", e),
                }
            })?;

            let value: f64 = record
                .get(1)
                .ok_or_else(|| RiskfoldError::Data {
                    reason: "missing return column".into(),
                })?
                .parse()
                .map_err(|e| RiskfoldError::Data {
                    reason: format!("invalid return value: {}", e),
                })?;

            points.push(ReturnPoint { date, value });
        }

        points.sort_by_key(|p| p.date);
        Ok(AssetReturns::new(asset.to_string(), points))
    }

    fn list_assets(&self) -> Result<Vec<String>, RiskfoldError> {
        let entries = fs::read_dir(&self.base_path).map_err(|e| RiskfoldError::Data {
            reason: format!(
                "failed to read directory {}: {}",
                self.base_path.display(),
                e
            ),
        })?;

        let mut assets = Vec::new();

        for entry in entries {
            let entry = entry.map_err(|e| RiskfoldError::Data {
                reason: format!("directory entry error: {}", e),
            })?;

            let name = entry.file_name();
            let name_str = name.to_string_lossy();

            if let Some(asset) = name_str.strip_suffix(".csv") {
                assets.push(asset.to_string());
            }
        }

        assets.sort();
        Ok(assets)
    }
}
