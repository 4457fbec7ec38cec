use densitometry::error::AnalysisError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("no {flag} folder given, pass --{flag} or set {var}")]
    MissingFolder {
        flag: &'static str,
        var: &'static str,
    },

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("failed to serialize output")]
    Json(#[from] serde_json::Error),
}
