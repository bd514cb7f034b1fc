//! CLI command implementations.

pub mod config;
pub mod history;
pub mod validate;
pub mod value;

pub use config::ConfigArgs;
pub use history::HistoryArgs;
pub use validate::ValidateArgs;
pub use value::ValueArgs;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use tracing::debug;

use bondval_config::ValuationConfig;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Settings shared by the commands that read or write files.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: ValuationConfig,
    pub format: OutputFormat,
    pub quiet: bool,
}

impl Context {
    /// Resolves the configuration file and builds the context.
    pub fn load(config_path: Option<&Path>, format: OutputFormat, quiet: bool) -> CliResult<Self> {
        let (config, source) = ValuationConfig::load(config_path)?;
        match source {
            Some(path) => debug!(path = %path.display(), "Loaded configuration"),
            None => debug!("Using default configuration"),
        }
        Ok(Self {
            config,
            format,
            quiet,
        })
    }

    /// Field delimiter for position, result and CSV output.
    pub fn delimiter(&self) -> u8 {
        self.config.delimiter_byte()
    }

    /// True when human-readable messages should be printed.
    pub fn chatty(&self) -> bool {
        !self.quiet && self.format == OutputFormat::Table
    }
}

/// Opens an input file for buffered reading.
pub fn open_input(path: &Path) -> CliResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|source| CliError::OpenInput {
            path: PathBuf::from(path),
            source,
        })
}
