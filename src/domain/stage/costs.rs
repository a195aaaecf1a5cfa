//! Transaction cost and slippage deduction.
//!
//! Trading activity is proxied by the day-over-day change in return
//! magnitude, not actual position turnover; a known simplification of
//! this model, kept as-is. The first date has no prior exposure and
//! carries no cost.

pub fn apply_costs(returns: &[f64], transaction_cost: f64, slippage: f64) -> Vec<f64> {
    let rate = transaction_cost + slippage;
    let mut prev_exposure: Option<f64> = None;

    returns
        .iter()
        .map(|&r| {
            let exposure = r.abs();
            let cost = match prev_exposure {
                Some(prev) => (exposure - prev).abs() * rate,
                None => 0.0,
            };
            prev_exposure = Some(exposure);
            r - cost
        })
        .collect()
}
