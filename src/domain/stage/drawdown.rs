//! Drawdown-aware exposure shaping.
//!
//! Cuts exposure when the cumulative drawdown of the equity curve
//! crosses a tier threshold. Tiers, first match wins:
//! dd <= -15% -> x0.30, dd <= -10% -> x0.50, dd <= -5% -> x0.75,
//! otherwise x1.00.

/// Which equity curve the tier thresholds are evaluated against.
///
/// `Raw` builds the curve from the unshaped portfolio returns and
/// evaluates each date independently, current return included. `Shaped`
/// compounds the already-shaped returns and evaluates each date against
/// the shaped curve up to the prior date. Two coherent historical
/// policies; `Raw` is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawdownBasis {
    #[default]
    Raw,
    Shaped,
}

fn tier(drawdown: f64) -> f64 {
    if drawdown <= -0.15 {
        0.30
    } else if drawdown <= -0.10 {
        0.50
    } else if drawdown <= -0.05 {
        0.75
    } else {
        1.00
    }
}

/// Scale each return by the tier matching the current drawdown.
pub fn shape_by_drawdown(returns: &[f64], basis: DrawdownBasis) -> Vec<f64> {
    match basis {
        DrawdownBasis::Raw => shape_raw(returns),
        DrawdownBasis::Shaped => shape_shaped(returns),
    }
}

fn shape_raw(returns: &[f64]) -> Vec<f64> {
    let mut equity = 1.0;
    let mut peak = f64::MIN;
    let mut out = Vec::with_capacity(returns.len());

    for &r in returns {
        equity *= 1.0 + r;
        if equity > peak {
            peak = equity;
        }
        let drawdown = equity / peak - 1.0;
        out.push(r * tier(drawdown));
    }

    out
}

fn shape_shaped(returns: &[f64]) -> Vec<f64> {
    let mut equity = 1.0;
    let mut peak = 1.0;
    let mut out = Vec::with_capacity(returns.len());

    for &r in returns {
        // Tier decided on the shaped curve up to the prior date, then
        // the curve advances by the shaped return.
        let drawdown = equity / peak - 1.0;
        let shaped = r * tier(drawdown);
        out.push(shaped);

        equity *= 1.0 + shaped;
        if equity > peak {
            peak = equity;
        }
    }

    out
}
