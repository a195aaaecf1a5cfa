//! CLI orchestration tests.
//!
//! Tests cover:
//! - Pipeline config built from INI files (full, defaults, invalid)
//! - Asset resolution precedence (override, config, data directory)
//! - Config file loading from disk

mod common;

use common::*;
use riskfold::adapters::file_config_adapter::FileConfigAdapter;
use riskfold::cli;
use riskfold::domain::config_validation::validate_pipeline_config;
use riskfold::domain::error::RiskfoldError;
use riskfold::domain::pipeline::{build_pipeline_config, PipelineConfig};
use riskfold::domain::stage::drawdown::DrawdownBasis;
use std::io::Write;

fn write_temp_ini(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

const VALID_INI: &str = r#"
[data]
path = ./returns

[portfolio]
assets = AAPL,MSFT,GOOGL
vol_window = 15
target_vol = 0.12
regime_window = 45
min_exposure = 0.5
loss_window = 8
loss_threshold = -0.03
loss_cut = 0.7
recovery_rate = 0.05
transaction_cost = 0.001
slippage = 0.0004
risk_free_rate = 0.03
drawdown_basis = shaped
"#;

mod config_loading {
    use super::*;

    #[test]
    fn build_pipeline_config_valid_full() {
        let adapter = FileConfigAdapter::from_string(VALID_INI).unwrap();
        let config = build_pipeline_config(&adapter).unwrap();

        assert_eq!(config.vol_window, 15);
        assert!((config.target_vol - 0.12).abs() < f64::EPSILON);
        assert_eq!(config.regime_window, 45);
        assert!((config.min_exposure - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.loss_window, 8);
        assert!((config.loss_threshold - (-0.03)).abs() < f64::EPSILON);
        assert!((config.loss_cut - 0.7).abs() < f64::EPSILON);
        assert!((config.recovery_rate - 0.05).abs() < f64::EPSILON);
        assert!((config.transaction_cost - 0.001).abs() < f64::EPSILON);
        assert!((config.slippage - 0.0004).abs() < f64::EPSILON);
        assert!((config.risk_free_rate - 0.03).abs() < f64::EPSILON);
        assert_eq!(config.drawdown_basis, DrawdownBasis::Shaped);

        assert!(validate_pipeline_config(&config).is_ok());
    }

    #[test]
    fn build_pipeline_config_uses_defaults() {
        let adapter = FileConfigAdapter::from_string("[portfolio]\n").unwrap();
        let config = build_pipeline_config(&adapter).unwrap();

        assert_eq!(config, PipelineConfig::default());
    }

    #[test]
    fn build_pipeline_config_partial_override() {
        let ini = "[portfolio]\ntarget_vol = 0.20\n";
        let adapter = FileConfigAdapter::from_string(ini).unwrap();
        let config = build_pipeline_config(&adapter).unwrap();

        assert!((config.target_vol - 0.20).abs() < f64::EPSILON);
        assert_eq!(config.vol_window, 20);
        assert_eq!(config.drawdown_basis, DrawdownBasis::Raw);
    }

    #[test]
    fn build_pipeline_config_bad_drawdown_basis() {
        let ini = "[portfolio]\ndrawdown_basis = sideways\n";
        let adapter = FileConfigAdapter::from_string(ini).unwrap();
        let err = build_pipeline_config(&adapter).unwrap_err();

        assert!(
            matches!(err, RiskfoldError::ConfigInvalid { key, .. } if key == "drawdown_basis")
        );
    }

    #[test]
    fn build_pipeline_config_negative_window() {
        let ini = "[portfolio]\nvol_window = -5\n";
        let adapter = FileConfigAdapter::from_string(ini).unwrap();
        let err = build_pipeline_config(&adapter).unwrap_err();

        assert!(matches!(err, RiskfoldError::ConfigInvalid { key, .. } if key == "vol_window"));
    }

    #[test]
    fn invalid_values_caught_by_validation() {
        let ini = "[portfolio]\nloss_cut = 2.0\n";
        let adapter = FileConfigAdapter::from_string(ini).unwrap();
        let config = build_pipeline_config(&adapter).unwrap();

        let err = validate_pipeline_config(&config).unwrap_err();
        assert!(matches!(err, RiskfoldError::ConfigInvalid { key, .. } if key == "loss_cut"));
    }

    #[test]
    fn load_config_from_disk() {
        let file = write_temp_ini(VALID_INI);
        let adapter = cli::load_config(&file.path().to_path_buf());
        assert!(adapter.is_ok());

        let config = build_pipeline_config(&adapter.unwrap()).unwrap();
        assert_eq!(config.vol_window, 15);
    }

    #[test]
    fn load_config_missing_file_fails() {
        let result = cli::load_config(&std::path::PathBuf::from("/nonexistent/config.ini"));
        assert!(result.is_err());
    }
}

mod asset_resolution {
    use super::*;

    #[test]
    fn override_beats_config() {
        let adapter = FileConfigAdapter::from_string(VALID_INI).unwrap();
        let port = MockReturnsPort::new().with_series(varied_series("ZZZ", 1.0, 5));

        let assets = cli::resolve_assets(Some("nvda,amd"), &adapter, &port).unwrap();
        assert_eq!(assets, vec!["NVDA", "AMD"]);
    }

    #[test]
    fn config_beats_directory_listing() {
        let adapter = FileConfigAdapter::from_string(VALID_INI).unwrap();
        let port = MockReturnsPort::new().with_series(varied_series("ZZZ", 1.0, 5));

        let assets = cli::resolve_assets(None, &adapter, &port).unwrap();
        assert_eq!(assets, vec!["AAPL", "MSFT", "GOOGL"]);
    }

    #[test]
    fn falls_back_to_directory_listing() {
        let adapter = FileConfigAdapter::from_string("[portfolio]\n").unwrap();
        let port = MockReturnsPort::new()
            .with_series(varied_series("BBB", 1.0, 5))
            .with_series(varied_series("AAA", 2.0, 5));

        let assets = cli::resolve_assets(None, &adapter, &port).unwrap();
        assert_eq!(assets, vec!["AAA", "BBB"]);
    }

    #[test]
    fn malformed_asset_list_is_config_error() {
        let adapter = FileConfigAdapter::from_string("[portfolio]\nassets = AAPL,,MSFT\n").unwrap();
        let port = MockReturnsPort::new();

        let err = cli::resolve_assets(None, &adapter, &port).unwrap_err();
        assert!(matches!(err, RiskfoldError::ConfigInvalid { key, .. } if key == "assets"));
    }
}
