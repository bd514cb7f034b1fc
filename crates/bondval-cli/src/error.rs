//! CLI error types.

use std::path::PathBuf;

use thiserror::Error;

use bondval_config::ConfigError;
use bondval_ext_file::FileError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file could not be opened.
    #[error("Cannot open {}: {source}", path.display())]
    OpenInput {
        /// The input path.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Position or result file error.
    #[error(transparent)]
    File(#[from] FileError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        CliError::Serialization(err.to_string())
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
