//! Performance statistics for a return series.
//!
//! Annualized return uses geometric compounding raised to 252/N (the
//! convention of the portfolio lineage; the alternate (1+mean)^252 - 1
//! form is deliberately not used so scenario tests and implementation
//! cannot drift apart).

use crate::domain::series::equity_curve;
use crate::domain::TRADING_DAYS_PER_YEAR;

/// Immutable summary statistics, computed once from a return snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerformanceReport {
    pub annual_return: f64,
    pub annual_volatility: f64,
    pub sharpe_ratio: f64,
    pub max_drawdown: f64,
}

impl PerformanceReport {
    pub fn compute(returns: &[f64], risk_free_rate: f64) -> Self {
        if returns.is_empty() {
            return Self {
                annual_return: 0.0,
                annual_volatility: 0.0,
                sharpe_ratio: 0.0,
                max_drawdown: 0.0,
            };
        }

        let n = returns.len() as f64;
        let cumulative: f64 = returns.iter().map(|r| 1.0 + r).product();
        let annual_return = if cumulative > 0.0 {
            cumulative.powf(TRADING_DAYS_PER_YEAR / n) - 1.0
        } else {
            -1.0
        };

        let annual_volatility = sample_std(returns) * TRADING_DAYS_PER_YEAR.sqrt();

        let sharpe_ratio = if annual_volatility > 0.0 {
            (annual_return - risk_free_rate) / annual_volatility
        } else {
            0.0
        };

        Self {
            annual_return,
            annual_volatility,
            sharpe_ratio,
            max_drawdown: max_drawdown(returns),
        }
    }
}

fn sample_std(returns: &[f64]) -> f64 {
    if returns.len() < 2 {
        return 0.0;
    }
    // Constant series: exactly zero, so the Sharpe guard can key on it.
    if returns.iter().all(|r| *r == returns[0]) {
        return 0.0;
    }
    let n = returns.len() as f64;
    let mean: f64 = returns.iter().sum::<f64>() / n;
    let variance: f64 = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
    variance.sqrt()
}

/// Minimum over time of equity / running peak - 1; always <= 0.
fn max_drawdown(returns: &[f64]) -> f64 {
    let equity = equity_curve(returns);
    let mut peak = f64::MIN;
    let mut worst = 0.0_f64;

    for value in equity {
        if value > peak {
            peak = value;
        }
        let drawdown = value / peak - 1.0;
        if drawdown < worst {
            worst = drawdown;
        }
    }

    worst
}
