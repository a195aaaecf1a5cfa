//! The portfolio risk-shaping pipeline.
//!
//! A strict linear chain over the aligned return table: risk-parity
//! weighting, weighted combination, drawdown shaping, volatility
//! targeting, regime scaling, loss-asymmetry dampening, cost deduction.
//! Deterministic single pass; the only state carried across dates lives
//! inside the dampener fold.

use crate::domain::config_validation::validate_pipeline_config;
use crate::domain::error::RiskfoldError;
use crate::domain::series::{aggregate_returns, equity_curve, AssetReturns};
use crate::domain::stage::costs::apply_costs;
use crate::domain::stage::dampener::{dampen_losses, DampenerParams};
use crate::domain::stage::drawdown::{shape_by_drawdown, DrawdownBasis};
use crate::domain::stage::regime::scale_by_regime;
use crate::domain::stage::vol_target::target_volatility;
use crate::domain::weights::{combine, risk_parity_weights};
use crate::ports::config_port::ConfigPort;
use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub vol_window: usize,
    pub target_vol: f64,
    pub regime_window: usize,
    pub min_exposure: f64,
    pub loss_window: usize,
    pub loss_threshold: f64,
    pub loss_cut: f64,
    pub recovery_rate: f64,
    pub transaction_cost: f64,
    pub slippage: f64,
    pub risk_free_rate: f64,
    pub drawdown_basis: DrawdownBasis,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            vol_window: 20,
            target_vol: 0.10,
            regime_window: 60,
            min_exposure: 0.6,
            loss_window: 10,
            loss_threshold: -0.02,
            loss_cut: 0.8,
            recovery_rate: 0.02,
            transaction_cost: 0.0005,
            slippage: 0.0002,
            risk_free_rate: 0.02,
            drawdown_basis: DrawdownBasis::Raw,
        }
    }
}

impl PipelineConfig {
    /// Longest warm-up any stage needs; the aligned table must have at
    /// least this many rows.
    pub fn minimum_rows(&self) -> usize {
        self.vol_window.max(self.regime_window).max(self.loss_window)
    }
}

/// Final shaped portfolio return stream and its derived equity curve.
#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioResult {
    pub dates: Vec<NaiveDate>,
    pub returns: Vec<f64>,
    pub equity: Vec<f64>,
}

/// Run the full pipeline over per-asset return series.
///
/// Validates the configuration, aligns the series, then applies every
/// shaping stage in order. Fails fast on invalid parameters or when the
/// aligned table is shorter than the largest configured window.
pub fn run_pipeline(
    series: &[AssetReturns],
    config: &PipelineConfig,
) -> Result<PortfolioResult, RiskfoldError> {
    validate_pipeline_config(config)?;

    let table = aggregate_returns(series)?;
    if table.row_count() < config.minimum_rows() {
        return Err(RiskfoldError::InsufficientData {
            rows: table.row_count(),
            minimum: config.minimum_rows(),
        });
    }

    let weights = risk_parity_weights(&table, config.vol_window);
    let raw = combine(&table, &weights);
    if raw.is_empty() {
        return Err(RiskfoldError::InsufficientData {
            rows: 0,
            minimum: 1,
        });
    }

    let shaped = shape_by_drawdown(&raw.returns, config.drawdown_basis);
    let targeted = target_volatility(&shaped, config.vol_window, config.target_vol);
    let scaled = scale_by_regime(
        &targeted,
        config.vol_window,
        config.regime_window,
        config.min_exposure,
    );
    let dampened = dampen_losses(
        &scaled,
        &DampenerParams {
            loss_window: config.loss_window,
            loss_threshold: config.loss_threshold,
            loss_cut: config.loss_cut,
            recovery_rate: config.recovery_rate,
        },
    );
    let net = apply_costs(&dampened, config.transaction_cost, config.slippage);

    let equity = equity_curve(&net);
    Ok(PortfolioResult {
        dates: raw.dates,
        returns: net,
        equity,
    })
}

/// Build a [`PipelineConfig`] from the `[portfolio]` section of a config
/// source, falling back to defaults for absent keys.
pub fn build_pipeline_config(config: &dyn ConfigPort) -> Result<PipelineConfig, RiskfoldError> {
    let defaults = PipelineConfig::default();

    let drawdown_basis = match config.get_string("portfolio", "drawdown_basis") {
        None => defaults.drawdown_basis,
        Some(s) => match s.to_lowercase().as_str() {
            "raw" => DrawdownBasis::Raw,
            "shaped" => DrawdownBasis::Shaped,
            other => {
                return Err(RiskfoldError::ConfigInvalid {
                    section: "portfolio".into(),
                    key: "drawdown_basis".into(),
                    reason: format!("expected 'raw' or 'shaped', got '{}'", other),
                });
            }
        },
    };

    let window = |key: &str, default: usize| -> Result<usize, RiskfoldError> {
        let value = config.get_int("portfolio", key, default as i64);
        usize::try_from(value).map_err(|_| RiskfoldError::ConfigInvalid {
            section: "portfolio".into(),
            key: key.into(),
            reason: format!("{key} must be non-negative"),
        })
    };

    Ok(PipelineConfig {
        vol_window: window("vol_window", defaults.vol_window)?,
        target_vol: config.get_double("portfolio", "target_vol", defaults.target_vol),
        regime_window: window("regime_window", defaults.regime_window)?,
        min_exposure: config.get_double("portfolio", "min_exposure", defaults.min_exposure),
        loss_window: window("loss_window", defaults.loss_window)?,
        loss_threshold: config.get_double("portfolio", "loss_threshold", defaults.loss_threshold),
        loss_cut: config.get_double("portfolio", "loss_cut", defaults.loss_cut),
        recovery_rate: config.get_double("portfolio", "recovery_rate", defaults.recovery_rate),
        transaction_cost: config.get_double(
            "portfolio",
            "transaction_cost",
            defaults.transaction_cost,
        ),
        slippage: config.get_double("portfolio", "slippage", defaults.slippage),
        risk_free_rate: config.get_double("portfolio", "risk_free_rate", defaults.risk_free_rate),
        drawdown_basis,
    })
}
