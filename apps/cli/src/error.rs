//! CLI error type.

use std::path::PathBuf;

/// Failures that stop a command before it can report a verdict.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    #[error("invalid configuration: {0}")]
    Config(#[from] Box<figment::Error>),

    #[error("invalid log filter `{filter}`: {reason}")]
    LogFilter { filter: String, reason: String },

    #[error("failed to install the log subscriber: {0}")]
    Logging(String),

    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not a valid form: {source}", path.display())]
    ParseInput {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not detect the document kind of `{0}`")]
    UnknownDocument(String),

    #[error("failed to serialize report: {0}")]
    Report(#[source] serde_json::Error),
}

impl From<figment::Error> for CliError {
    fn from(error: figment::Error) -> Self {
        Self::Config(Box::new(error))
    }
}
