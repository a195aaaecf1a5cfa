//! Domain error types.

/// Top-level error type for riskfold.
#[derive(Debug, thiserror::Error)]
pub enum RiskfoldError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("data error: {reason}")]
    Data { reason: String },

    #[error("insufficient aligned data: have {rows} rows, need {minimum}")]
    InsufficientData { rows: usize, minimum: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&RiskfoldError> for std::process::ExitCode {
    fn from(err: &RiskfoldError) -> Self {
        let code: u8 = match err {
            RiskfoldError::Io(_) => 1,
            RiskfoldError::ConfigParse { .. }
            | RiskfoldError::ConfigMissing { .. }
            | RiskfoldError::ConfigInvalid { .. } => 2,
            RiskfoldError::Data { .. } => 3,
            RiskfoldError::InsufficientData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
