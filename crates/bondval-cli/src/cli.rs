//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{ConfigArgs, HistoryArgs, ValidateArgs, ValueArgs};

/// Bondval - bond position valuation
#[derive(Parser)]
#[command(name = "bondval")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, env = "BONDVAL_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Value every row of a position file
    Value(ValueArgs),

    /// Check that a position file can be valued
    Validate(ValidateArgs),

    /// List the most recent result files in a directory
    History(HistoryArgs),

    /// Show or create the configuration file
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// Delimited format, using the configured delimiter
    Csv,
}
