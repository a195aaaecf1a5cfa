#![allow(dead_code)]

use chrono::NaiveDate;
use riskfold::domain::error::RiskfoldError;
use riskfold::domain::series::{AssetReturns, ReturnPoint};
use riskfold::ports::returns_port::ReturnsPort;
use std::collections::HashMap;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Return series starting 2024-01-01 with one observation per day.
pub fn make_series(asset: &str, values: &[f64]) -> AssetReturns {
    let points = values
        .iter()
        .enumerate()
        .map(|(i, &value)| ReturnPoint {
            date: date(2024, 1, 1) + chrono::Duration::days(i as i64),
            value,
        })
        .collect();
    AssetReturns::new(asset.to_string(), points)
}

/// Deterministic varied daily returns, bounded around +/- 2%.
pub fn varied_series(asset: &str, seed: f64, len: usize) -> AssetReturns {
    let values: Vec<f64> = (0..len).map(|i| (i as f64 * seed).sin() * 0.02).collect();
    make_series(asset, &values)
}

pub struct MockReturnsPort {
    pub data: HashMap<String, AssetReturns>,
    pub errors: HashMap<String, String>,
}

impl MockReturnsPort {
    pub fn new() -> Self {
        Self {
            data: HashMap::new(),
            errors: HashMap::new(),
        }
    }

    pub fn with_series(mut self, series: AssetReturns) -> Self {
        self.data.insert(series.asset.clone(), series);
        self
    }

    pub fn with_error(mut self, asset: &str, reason: &str) -> Self {
        self.errors.insert(asset.to_string(), reason.to_string());
        self
    }
}

impl ReturnsPort for MockReturnsPort {
    fn fetch_returns(&self, asset: &str) -> Result<AssetReturns, RiskfoldError> {
        if let Some(reason) = self.errors.get(asset) {
            return Err(RiskfoldError::Data {
                reason: reason.clone(),
            });
        }
        self.data
            .get(asset)
            .cloned()
            .ok_or_else(|| RiskfoldError::Data {
                reason: format!("no series for {asset}"),
            })
    }

    fn list_assets(&self) -> Result<Vec<String>, RiskfoldError> {
        let mut assets: Vec<String> = self.data.keys().cloned().collect();
        assets.sort();
        Ok(assets)
    }
}
