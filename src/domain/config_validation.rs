//! Pipeline configuration validation.
//!
//! Every parameter is checked before any computation; a bad value fails
//! fast with the offending `[portfolio]` key named.

use crate::domain::error::RiskfoldError;
use crate::domain::pipeline::PipelineConfig;

pub fn validate_pipeline_config(config: &PipelineConfig) -> Result<(), RiskfoldError> {
    validate_windows(config)?;
    validate_target_vol(config)?;
    validate_min_exposure(config)?;
    validate_dampener(config)?;
    validate_costs(config)?;
    validate_risk_free_rate(config)?;
    Ok(())
}

fn invalid(key: &str, reason: String) -> RiskfoldError {
    RiskfoldError::ConfigInvalid {
        section: "portfolio".to_string(),
        key: key.to_string(),
        reason,
    }
}

fn validate_windows(config: &PipelineConfig) -> Result<(), RiskfoldError> {
    if config.vol_window < 2 {
        return Err(invalid(
            "vol_window",
            "vol_window must be at least 2".to_string(),
        ));
    }
    if config.regime_window < 2 {
        return Err(invalid(
            "regime_window",
            "regime_window must be at least 2".to_string(),
        ));
    }
    if config.loss_window < 1 {
        return Err(invalid(
            "loss_window",
            "loss_window must be at least 1".to_string(),
        ));
    }
    Ok(())
}

fn validate_target_vol(config: &PipelineConfig) -> Result<(), RiskfoldError> {
    if config.target_vol <= 0.0 || !config.target_vol.is_finite() {
        return Err(invalid(
            "target_vol",
            "target_vol must be positive".to_string(),
        ));
    }
    Ok(())
}

fn validate_min_exposure(config: &PipelineConfig) -> Result<(), RiskfoldError> {
    if config.min_exposure <= 0.0 || config.min_exposure > 1.0 {
        return Err(invalid(
            "min_exposure",
            "min_exposure must be in (0, 1]".to_string(),
        ));
    }
    Ok(())
}

fn validate_dampener(config: &PipelineConfig) -> Result<(), RiskfoldError> {
    if config.loss_threshold < -1.0 || config.loss_threshold >= 0.0 {
        return Err(invalid(
            "loss_threshold",
            "loss_threshold must be in [-1, 0)".to_string(),
        ));
    }
    if config.loss_cut <= 0.0 || config.loss_cut > 1.0 {
        return Err(invalid(
            "loss_cut",
            "loss_cut must be in (0, 1]".to_string(),
        ));
    }
    if config.recovery_rate < 0.0 || config.recovery_rate > 1.0 {
        return Err(invalid(
            "recovery_rate",
            "recovery_rate must be in [0, 1]".to_string(),
        ));
    }
    Ok(())
}

fn validate_costs(config: &PipelineConfig) -> Result<(), RiskfoldError> {
    if config.transaction_cost < 0.0 {
        return Err(invalid(
            "transaction_cost",
            "transaction_cost must be non-negative".to_string(),
        ));
    }
    if config.slippage < 0.0 {
        return Err(invalid(
            "slippage",
            "slippage must be non-negative".to_string(),
        ));
    }
    Ok(())
}

fn validate_risk_free_rate(config: &PipelineConfig) -> Result<(), RiskfoldError> {
    if config.risk_free_rate < 0.0 || config.risk_free_rate >= 1.0 {
        return Err(invalid(
            "risk_free_rate",
            "risk_free_rate must be between 0 and 1".to_string(),
        ));
    }
    Ok(())
}
