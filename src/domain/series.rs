//! Return series types and time alignment.
//!
//! Per-asset strategy returns arrive as independent date-indexed series.
//! Aggregation intersects them on the common date index: any date missing
//! a value for any asset is dropped outright (no imputation).

use crate::domain::error::RiskfoldError;
use chrono::NaiveDate;
use std::collections::{BTreeMap, HashSet};

/// A single (date, return) observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReturnPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Time-ordered return series for one asset, produced externally by a
/// signal generator + backtest transform. Assumed lookahead-bias-free.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetReturns {
    pub asset: String,
    pub points: Vec<ReturnPoint>,
}

impl AssetReturns {
    pub fn new(asset: String, points: Vec<ReturnPoint>) -> Self {
        Self { asset, points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Inner-aligned return table: one row per date present for every asset.
///
/// Invariant: `rows[t].len() == assets.len()` for every row — no partial
/// rows survive aggregation.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnTable {
    pub assets: Vec<String>,
    pub dates: Vec<NaiveDate>,
    pub rows: Vec<Vec<f64>>,
}

impl ReturnTable {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns of one asset across all aligned dates.
    pub fn column(&self, index: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[index]).collect()
    }
}

/// Intersect all series on their date index, dropping dates where any
/// asset lacks a value. Fails when the intersection is empty.
pub fn aggregate_returns(series: &[AssetReturns]) -> Result<ReturnTable, RiskfoldError> {
    if series.is_empty() {
        return Err(RiskfoldError::InsufficientData {
            rows: 0,
            minimum: 1,
        });
    }

    let maps: Vec<BTreeMap<NaiveDate, f64>> = series
        .iter()
        .map(|s| s.points.iter().map(|p| (p.date, p.value)).collect())
        .collect();

    let dates: Vec<NaiveDate> = maps[0]
        .keys()
        .filter(|date| maps[1..].iter().all(|m| m.contains_key(*date)))
        .copied()
        .collect();

    if dates.is_empty() {
        return Err(RiskfoldError::InsufficientData {
            rows: 0,
            minimum: 1,
        });
    }

    let rows: Vec<Vec<f64>> = dates
        .iter()
        .map(|date| maps.iter().map(|m| m[date]).collect())
        .collect();

    Ok(ReturnTable {
        assets: series.iter().map(|s| s.asset.clone()).collect(),
        dates,
        rows,
    })
}

/// A single date-indexed portfolio return stream, as produced by the
/// combiner and carried through every shaping stage.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioSeries {
    pub dates: Vec<NaiveDate>,
    pub returns: Vec<f64>,
}

impl PortfolioSeries {
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }
}

/// Cumulative product of (1 + return): the equity curve, starting from
/// `1 + returns[0]`.
pub fn equity_curve(returns: &[f64]) -> Vec<f64> {
    let mut equity = Vec::with_capacity(returns.len());
    let mut acc = 1.0;
    for r in returns {
        acc *= 1.0 + r;
        equity.push(acc);
    }
    equity
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AssetListError {
    #[error("empty token in asset list")]
    EmptyToken,

    #[error("duplicate asset: {0}")]
    DuplicateAsset(String),
}

/// Parse a comma-separated asset list: trimmed, uppercased, duplicates
/// and empty tokens rejected.
pub fn parse_assets(input: &str) -> Result<Vec<String>, AssetListError> {
    let mut assets = Vec::new();
    let mut seen = HashSet::new();

    for token in input.split(',') {
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(AssetListError::EmptyToken);
        }
        let asset = trimmed.to_uppercase();
        if seen.contains(&asset) {
            return Err(AssetListError::DuplicateAsset(asset));
        }
        seen.insert(asset.clone());
        assets.push(asset);
    }

    Ok(assets)
}
