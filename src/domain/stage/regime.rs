//! Volatility-regime exposure scaling.
//!
//! Compares short-horizon realized volatility against its own longer
//! history. When the short horizon spikes relative to the long one the
//! regime is turbulent and exposure is cut proportionally, floored at
//! `min_exposure` so this stage alone never zeroes the portfolio.

use crate::domain::rolling::rolling_std;

pub fn scale_by_regime(
    returns: &[f64],
    vol_window: usize,
    regime_window: usize,
    min_exposure: f64,
) -> Vec<f64> {
    let short = rolling_std(returns, vol_window);
    let long = rolling_std(returns, regime_window);

    returns
        .iter()
        .enumerate()
        .map(|(t, &r)| {
            let exposure = match (short[t], long[t]) {
                (Some(s), Some(l)) if s > 0.0 && l > 0.0 => (l / s).clamp(min_exposure, 1.0),
                _ => 1.0,
            };
            r * exposure
        })
        .collect()
}
