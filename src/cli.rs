//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvReturnsAdapter;
use crate::adapters::csv_report_adapter::CsvReportAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::config_validation::validate_pipeline_config;
use crate::domain::error::RiskfoldError;
use crate::domain::metrics::PerformanceReport;
use crate::domain::pipeline::{build_pipeline_config, run_pipeline};
use crate::domain::series::{parse_assets, AssetReturns};
use crate::ports::config_port::ConfigPort;
use crate::ports::report_port::ReportPort;
use crate::ports::returns_port::ReturnsPort;

#[derive(Parser, Debug)]
#[command(name = "riskfold", about = "Portfolio risk-shaping engine")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the portfolio pipeline
    Run {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        data: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
        #[arg(long)]
        assets: Option<String>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
    /// List assets available in a data directory
    ListAssets {
        #[arg(short, long)]
        data: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Run {
            config,
            data,
            output,
            assets,
        } => run_portfolio(&config, data.as_ref(), output.as_ref(), assets.as_deref()),
        Command::Validate { config } => run_validate(&config),
        Command::ListAssets { data } => run_list_assets(&data),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = RiskfoldError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Asset list from the CLI override, then the config, then everything
/// the data directory offers.
pub fn resolve_assets(
    override_list: Option<&str>,
    config: &dyn ConfigPort,
    returns_port: &dyn ReturnsPort,
) -> Result<Vec<String>, RiskfoldError> {
    let configured = match override_list {
        Some(list) => Some(list.to_string()),
        None => config.get_string("portfolio", "assets"),
    };

    match configured {
        Some(list) => parse_assets(&list).map_err(|e| RiskfoldError::ConfigInvalid {
            section: "portfolio".into(),
            key: "assets".into(),
            reason: e.to_string(),
        }),
        None => returns_port.list_assets(),
    }
}

fn resolve_data_dir(data_override: Option<&PathBuf>, config: &dyn ConfigPort) -> Option<PathBuf> {
    match data_override {
        Some(path) => Some(path.clone()),
        None => config.get_string("data", "path").map(PathBuf::from),
    }
}

fn run_portfolio(
    config_path: &PathBuf,
    data_override: Option<&PathBuf>,
    output_path: Option<&PathBuf>,
    asset_override: Option<&str>,
) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let pipeline_config = match build_pipeline_config(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    if let Err(e) = validate_pipeline_config(&pipeline_config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let data_dir = match resolve_data_dir(data_override, &adapter) {
        Some(dir) => dir,
        None => {
            let err = RiskfoldError::ConfigMissing {
                section: "data".into(),
                key: "path".into(),
            };
            eprintln!("error: {err}");
            return (&err).into();
        }
    };

    let returns_port = CsvReturnsAdapter::new(data_dir);
    let assets = match resolve_assets(asset_override, &adapter, &returns_port) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    if assets.is_empty() {
        eprintln!("error: no assets configured");
        return ExitCode::from(2);
    }

    eprintln!("Loading {} asset return series...", assets.len());
    let mut series: Vec<AssetReturns> = Vec::with_capacity(assets.len());
    for asset in &assets {
        match returns_port.fetch_returns(asset) {
            Ok(s) => {
                eprintln!("  {}: {} observations", asset, s.len());
                series.push(s);
            }
            Err(e) => {
                eprintln!("error: {e}");
                return (&e).into();
            }
        }
    }

    let result = match run_pipeline(&series, &pipeline_config) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let report = PerformanceReport::compute(&result.returns, pipeline_config.risk_free_rate);
    println!("Annual Return:     {:>9.4}", report.annual_return);
    println!("Annual Volatility: {:>9.4}", report.annual_volatility);
    println!("Sharpe Ratio:      {:>9.4}", report.sharpe_ratio);
    println!("Max Drawdown:      {:>9.4}", report.max_drawdown);

    if let Some(path) = output_path {
        let path_str = path.display().to_string();
        if let Err(e) = CsvReportAdapter.write(&result, &path_str) {
            eprintln!("error: {e}");
            return (&e).into();
        }
        eprintln!("Wrote {} rows to {}", result.returns.len(), path_str);
    }

    ExitCode::SUCCESS
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    let adapter = match load_config(config_path) {
        Ok(a) => a,
        Err(code) => return code,
    };

    let pipeline_config = match build_pipeline_config(&adapter) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    match validate_pipeline_config(&pipeline_config) {
        Ok(()) => {
            println!("{}: ok", config_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}

fn run_list_assets(data_dir: &PathBuf) -> ExitCode {
    let returns_port = CsvReturnsAdapter::new(data_dir.clone());
    match returns_port.list_assets() {
        Ok(assets) => {
            for asset in assets {
                println!("{asset}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            (&e).into()
        }
    }
}
