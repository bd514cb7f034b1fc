//! Bondval CLI - values bond position files.
//!
//! # Usage
//!
//! ```bash
//! # Value a position file and print the results
//! bondval value positions.csv
//!
//! # Write the result file next to earlier runs
//! bondval value positions.csv --output-dir out/ --timestamp
//!
//! # Check a file before queueing it
//! bondval validate positions.csv
//!
//! # Show the most recent result files
//! bondval history out/ --count 10
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::Context;

fn main() -> Result<()> {
    let Cli {
        format,
        config,
        verbose,
        quiet,
        command,
    } = Cli::parse();

    init_tracing(verbose);

    let context = || Context::load(config.as_deref(), format, quiet);

    match command {
        Commands::Value(args) => commands::value::execute(args, &context()?)?,
        Commands::Validate(args) => commands::validate::execute(args, &context()?)?,
        Commands::History(args) => commands::history::execute(args, &context()?)?,
        // Resolves its own file so `init` works before one exists
        Commands::Config(args) => commands::config::execute(args, config.as_deref(), format)?,
    }

    Ok(())
}

/// Logs go to stderr; stdout carries results only.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
