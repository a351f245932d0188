//! Domain error types.

/// Top-level error type for congress-universe.
#[derive(Debug, thiserror::Error)]
pub enum CongressError {
    #[error("data source error: {reason}")]
    DataSource { reason: String },

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

    #[error("unexpected universe history: {reason}")]
    History { reason: String },

    #[error("no universe data between {start} and {end}")]
    NoData { start: String, end: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&CongressError> for std::process::ExitCode {
    fn from(err: &CongressError) -> Self {
        let code: u8 = match err {
            CongressError::Io(_) => 1,
            CongressError::ConfigParse { .. }
            | CongressError::ConfigMissing { .. }
            | CongressError::ConfigInvalid { .. } => 2,
            CongressError::DataSource { .. } => 3,
            CongressError::History { .. } => 4,
            CongressError::NoData { .. } => 5,
        };
        std::process::ExitCode::from(code)
    }
}
