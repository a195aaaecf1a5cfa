//! Rolling window statistics.
//!
//! Sample standard deviation over the trailing `window` observations.
//! Warm-up: the first (window - 1) positions are `None`. The same
//! estimator feeds asset weighting, volatility targeting and regime
//! detection, so scaling factors stay consistent downstream.

/// Rolling sample standard deviation (denominator `window - 1`).
///
/// Requires `window >= 2`; enforced upstream by config validation.
pub fn rolling_std(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let warmup = window.saturating_sub(1);
    let mut out = Vec::with_capacity(values.len());

    for i in 0..values.len() {
        if i < warmup {
            out.push(None);
            continue;
        }

        let slice = &values[i + 1 - window..=i];

        // A constant window has exactly zero dispersion; going through
        // the mean would leave rounding dust, and downstream fallbacks
        // key on an exact zero.
        if slice.iter().all(|v| *v == slice[0]) {
            out.push(Some(0.0));
            continue;
        }

        let mean: f64 = slice.iter().sum::<f64>() / window as f64;
        let variance: f64 = slice
            .iter()
            .map(|v| {
                let diff = v - mean;
                diff * diff
            })
            .sum::<f64>()
            / (window - 1) as f64;

        out.push(Some(variance.sqrt()));
    }

    out
}

/// Rolling sum over the trailing `window` observations, `None` during
/// warm-up.
pub fn rolling_sum(values: &[f64], window: usize) -> Vec<Option<f64>> {
    let warmup = window.saturating_sub(1);
    let mut out = Vec::with_capacity(values.len());
    let mut acc = 0.0;

    for i in 0..values.len() {
        acc += values[i];
        if i >= window {
            acc -= values[i - window];
        }
        if i < warmup {
            out.push(None);
        } else {
            out.push(Some(acc));
        }
    }

    out
}
