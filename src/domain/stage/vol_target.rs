//! Portfolio volatility targeting.
//!
//! Rescales the shaped return so realized annualized volatility tracks
//! the configured target. The scale is capped at 1.5 (hard leverage
//! ceiling) and unbounded below; with no reliable volatility estimate
//! (warm-up, or exactly zero) the scale is 1.0.

use crate::domain::rolling::rolling_std;
use crate::domain::TRADING_DAYS_PER_YEAR;

const MAX_LEVERAGE: f64 = 1.5;

pub fn target_volatility(returns: &[f64], vol_window: usize, target_vol: f64) -> Vec<f64> {
    let vols = rolling_std(returns, vol_window);
    let annualizer = TRADING_DAYS_PER_YEAR.sqrt();

    returns
        .iter()
        .zip(vols.iter())
        .map(|(&r, vol)| {
            let scale = match vol {
                Some(v) if *v > 0.0 => (target_vol / (v * annualizer)).min(MAX_LEVERAGE),
                _ => 1.0,
            };
            r * scale
        })
        .collect()
}
