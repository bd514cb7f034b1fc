//! Value command implementation.
//!
//! Reads a position file, values every row that maps and writes the results
//! either to a result file or to stdout.

use std::fs::{self, File};
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Utc;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::info;

use bondval_core::{RowFailure, ValuationResult};
use bondval_engine::{BatchReport, BatchValuator};
use bondval_ext_file::{output_file_name, read_rows, timestamped_name, write_results};

use crate::cli::OutputFormat;
use crate::commands::{open_input, Context};
use crate::output::{print_json, print_success, print_table, print_warning};

/// Arguments for the value command.
#[derive(Args, Debug)]
pub struct ValueArgs {
    /// Position file to value
    pub input: PathBuf,

    /// Write the result file to this path
    #[arg(short, long, conflicts_with = "output_dir")]
    pub output: Option<PathBuf>,

    /// Write the result file into this directory, named after the input
    #[arg(short = 'd', long)]
    pub output_dir: Option<PathBuf>,

    /// Prefix the result file name with the UTC run time
    #[arg(long, requires = "output_dir")]
    pub timestamp: bool,

    /// Value rows in parallel
    #[arg(long)]
    pub parallel: bool,
}

/// One valued bond, as shown in a table.
#[derive(Debug, Serialize, Tabled)]
struct ResultRow {
    #[tabled(rename = "Bond ID")]
    bond_id: String,
    #[tabled(rename = "Type")]
    instrument_type: String,
    #[tabled(rename = "Present Value")]
    present_value: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

impl From<&ValuationResult> for ResultRow {
    fn from(result: &ValuationResult) -> Self {
        Self {
            bond_id: result.bond_id.clone(),
            instrument_type: result.instrument_type.to_string(),
            present_value: format!("{:.2}", result.present_value),
            notes: result.notes.clone().unwrap_or_default(),
        }
    }
}

/// A skipped row, as shown in a table.
#[derive(Debug, Serialize, Tabled)]
pub(crate) struct FailureRow {
    #[tabled(rename = "Row")]
    row: usize,
    #[tabled(rename = "Bond ID")]
    bond_id: String,
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Error")]
    message: String,
}

impl From<&RowFailure> for FailureRow {
    fn from(failure: &RowFailure) -> Self {
        Self {
            row: failure.row,
            bond_id: failure.bond_id.clone().unwrap_or_default(),
            field: failure.field,
            value: failure.value.clone(),
            message: failure.message.clone(),
        }
    }
}

/// Execute the value command.
pub fn execute(args: ValueArgs, ctx: &Context) -> Result<()> {
    let rows = read_rows(open_input(&args.input)?, ctx.delimiter())?;

    let report = BatchValuator::new()
        .with_options(ctx.config.mapping_options())
        .with_parallel(args.parallel || ctx.config.parallel)
        .run(&rows);

    match destination(&args, ctx) {
        Some(path) => {
            write_result_file(&path, &report, ctx)?;
            info!(path = %path.display(), run_id = %report.run_id, "Wrote result file");
            if !ctx.quiet {
                let summary = report.summary();
                print_success(&format!(
                    "Valued {} of {} rows into {}",
                    summary.valued,
                    summary.rows,
                    path.display()
                ));
            }
        }
        None => render(&report, ctx)?,
    }

    if !report.is_clean() && !ctx.quiet {
        print_warning(&format!("{} row(s) skipped", report.failures.len()));
        if ctx.chatty() {
            let failures: Vec<FailureRow> = report.failures.iter().map(FailureRow::from).collect();
            print_table(&failures);
        }
    }

    Ok(())
}

/// Result file path, or `None` to print to stdout.
fn destination(args: &ValueArgs, ctx: &Context) -> Option<PathBuf> {
    if let Some(path) = &args.output {
        return Some(path.clone());
    }
    let dir = args.output_dir.as_ref()?;

    let input_name = args
        .input
        .file_name()
        .map_or_else(|| args.input.to_string_lossy(), |name| name.to_string_lossy());
    let name = if args.timestamp {
        timestamped_name(&input_name, Utc::now())
    } else {
        input_name.into_owned()
    };
    Some(dir.join(output_file_name(&name, &ctx.config.output_prefix)))
}

fn write_result_file(path: &Path, report: &BatchReport, ctx: &Context) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_results(BufWriter::new(file), &report.results, ctx.delimiter())?;
    Ok(())
}

fn render(report: &BatchReport, ctx: &Context) -> Result<()> {
    match ctx.format {
        OutputFormat::Table => {
            let rows: Vec<ResultRow> = report.results.iter().map(ResultRow::from).collect();
            print_table(&rows);
        }
        OutputFormat::Json => print_json(report)?,
        OutputFormat::Csv => write_results(io::stdout().lock(), &report.results, ctx.delimiter())?,
    }
    Ok(())
}
