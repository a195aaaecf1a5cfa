//! Loss-asymmetry dampening: the one genuinely stateful stage.
//!
//! A single exposure scalar is threaded through a strict left-to-right
//! fold over the time-ordered series. A trailing window of poor
//! performance cuts exposure multiplicatively; anything else recovers it
//! additively, capped at full exposure. The recurrence depends on its
//! own previous value and must not be reordered or parallelized across
//! time.

use crate::domain::rolling::rolling_sum;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DampenerParams {
    pub loss_window: usize,
    pub loss_threshold: f64,
    pub loss_cut: f64,
    pub recovery_rate: f64,
}

impl Default for DampenerParams {
    fn default() -> Self {
        Self {
            loss_window: 10,
            loss_threshold: -0.02,
            loss_cut: 0.8,
            recovery_rate: 0.02,
        }
    }
}

/// The exposure path E_t in [0, 1]: 1.0 at the first date, then one
/// transition per date. An undefined trailing sum (still inside the
/// warm-up of `loss_window`) is not a breach and takes the recovery
/// branch.
pub fn loss_exposures(returns: &[f64], params: &DampenerParams) -> Vec<f64> {
    if returns.is_empty() {
        return Vec::new();
    }

    let rolling_perf = rolling_sum(returns, params.loss_window);
    let mut exposures = Vec::with_capacity(returns.len());
    let mut e = 1.0_f64;
    exposures.push(e);

    for perf in rolling_perf.iter().skip(1) {
        e = match perf {
            Some(p) if *p < params.loss_threshold => e * params.loss_cut,
            _ => (e + params.recovery_rate).min(1.0),
        };
        exposures.push(e);
    }

    exposures
}

/// Shrink each return by the exposure state at its date.
pub fn dampen_losses(returns: &[f64], params: &DampenerParams) -> Vec<f64> {
    loss_exposures(returns, params)
        .iter()
        .zip(returns.iter())
        .map(|(e, r)| r * e)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn params(loss_window: usize) -> DampenerParams {
        DampenerParams {
            loss_window,
            ..DampenerParams::default()
        }
    }

    #[test]
    fn initial_exposure_is_full() {
        let e = loss_exposures(&[0.01, 0.01], &params(3));
        assert_relative_eq!(e[0], 1.0);
        assert_relative_eq!(e[1], 1.0);
    }

    #[test]
    fn consecutive_breaches_decay_geometrically() {
        // Every trailing 2-day sum is well below the threshold from the
        // second date on: k breaches leave exposure at loss_cut^k.
        let returns = [-0.05; 6];
        let e = loss_exposures(&returns, &params(2));

        assert_relative_eq!(e[0], 1.0);
        for (k, exposure) in e.iter().enumerate().skip(1) {
            assert_relative_eq!(*exposure, 0.8_f64.powi(k as i32), epsilon = 1e-12);
        }
    }

    #[test]
    fn recovery_is_additive_and_capped() {
        let mut returns = vec![-0.05; 4];
        returns.extend_from_slice(&[0.05; 12]);
        let p = DampenerParams {
            loss_window: 2,
            recovery_rate: 0.1,
            ..DampenerParams::default()
        };
        let e = loss_exposures(&returns, &p);

        // Three breaches (dates 1-3), then date 4's trailing sum
        // (-0.05 + 0.05 = 0) clears the threshold and recovery begins.
        assert_relative_eq!(e[3], 0.8_f64.powi(3), epsilon = 1e-12);
        assert_relative_eq!(e[4], 0.8_f64.powi(3) + 0.1, epsilon = 1e-12);
        assert_relative_eq!(e[5], 0.8_f64.powi(3) + 0.2, epsilon = 1e-12);

        // Long quiet stretch: capped at 1.0, never above.
        assert_relative_eq!(*e.last().unwrap(), 1.0);
        for exposure in &e {
            assert!(*exposure <= 1.0 && *exposure >= 0.0);
        }
    }

    #[test]
    fn warmup_window_takes_recovery_branch() {
        // loss_window longer than the series: every trailing sum is
        // undefined, so exposure only recovers (here: stays at cap).
        let returns = [-0.50, -0.50, -0.50];
        let e = loss_exposures(&returns, &params(10));
        assert_eq!(e, vec![1.0, 1.0, 1.0]);
    }

    #[test]
    fn dampened_output_is_input_times_exposure() {
        let returns = [-0.05, -0.05, 0.01];
        let p = params(2);
        let e = loss_exposures(&returns, &p);
        let out = dampen_losses(&returns, &p);

        for i in 0..returns.len() {
            assert_relative_eq!(out[i], returns[i] * e[i], epsilon = 1e-15);
        }
    }

    #[test]
    fn empty_input() {
        assert!(loss_exposures(&[], &params(3)).is_empty());
        assert!(dampen_losses(&[], &params(3)).is_empty());
    }
}
