//! Config command implementation.
//!
//! Shows the effective configuration or writes a default file.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};

use bondval_config::ValuationConfig;

use crate::cli::OutputFormat;
use crate::output::{print_info, print_json, print_output, print_success, KeyValue};

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a configuration file with default settings
    Init(InitArgs),

    /// Show the default configuration file location
    Path,
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the file (defaults to --config, then the user config directory)
    #[arg(long)]
    pub path: Option<PathBuf>,

    /// Replace an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(config_path, format),
        ConfigCommand::Init(init) => {
            let path = init
                .path
                .or_else(|| config_path.map(Path::to_path_buf))
                .or_else(ValuationConfig::default_path)
                .ok_or_else(|| {
                    anyhow!("No configuration directory on this platform; pass --path")
                })?;
            ValuationConfig::default().write_to(&path, init.force)?;
            print_success(&format!("Wrote {}", path.display()));
            Ok(())
        }
        ConfigCommand::Path => {
            match ValuationConfig::default_path() {
                Some(path) => println!("{}", path.display()),
                None => print_info("No configuration directory on this platform"),
            }
            Ok(())
        }
    }
}

fn show(config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let (config, source) = ValuationConfig::load(config_path)?;

    if format == OutputFormat::Json {
        print_json(&config)?;
        return Ok(());
    }

    let settings = vec![
        KeyValue::new(
            "source",
            source.map_or_else(|| "built-in defaults".to_string(), |p| p.display().to_string()),
        ),
        KeyValue::new("delimiter", config.delimiter.escape_default()),
        KeyValue::new("output_prefix", &config.output_prefix),
        KeyValue::new("parallel", config.parallel),
        KeyValue::new("none_frequency", config.none_frequency),
        KeyValue::new("validate_ranges", config.validate_ranges),
        KeyValue::new("history_count", config.history_count),
    ];
    print_output(&settings, format, config.delimiter_byte())?;
    Ok(())
}

