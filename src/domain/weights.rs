//! Inverse-volatility (risk parity) weighting and portfolio combination.
//!
//! Lower-volatility assets receive proportionally more weight so each
//! contributes comparable risk. Zero or undefined volatility is treated
//! as infinite risk: weight 0, never a division by zero.

use crate::domain::rolling::rolling_std;
use crate::domain::series::{PortfolioSeries, ReturnTable};

/// Per-date asset weights, parallel to the aligned return table.
///
/// A row is `None` when no asset has a defined, nonzero rolling
/// volatility at that date (warm-up, or all-flat inputs); such rows are
/// excluded from the combiner. Defined rows sum to 1.0.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    pub rows: Vec<Option<Vec<f64>>>,
}

/// Daily inverse-volatility weights across assets.
pub fn risk_parity_weights(table: &ReturnTable, vol_window: usize) -> WeightTable {
    let vols: Vec<Vec<Option<f64>>> = (0..table.assets.len())
        .map(|i| rolling_std(&table.column(i), vol_window))
        .collect();

    let rows = (0..table.row_count())
        .map(|t| {
            let inv_vol: Vec<f64> = vols
                .iter()
                .map(|asset_vol| match asset_vol[t] {
                    Some(v) if v > 0.0 => 1.0 / v,
                    _ => 0.0,
                })
                .collect();

            let total: f64 = inv_vol.iter().sum();
            if total > 0.0 {
                Some(inv_vol.iter().map(|w| w / total).collect())
            } else {
                None
            }
        })
        .collect();

    WeightTable { rows }
}

/// Raw portfolio return: the weighted sum of asset returns per date.
/// Rows with undefined weights are dropped, so the output index is the
/// aligned index minus warm-up gaps.
pub fn combine(table: &ReturnTable, weights: &WeightTable) -> PortfolioSeries {
    let mut dates = Vec::new();
    let mut returns = Vec::new();

    for (t, row_weights) in weights.rows.iter().enumerate() {
        if let Some(w) = row_weights {
            let value: f64 = w
                .iter()
                .zip(table.rows[t].iter())
                .map(|(weight, ret)| weight * ret)
                .sum();
            dates.push(table.dates[t]);
            returns.push(value);
        }
    }

    PortfolioSeries { dates, returns }
}
