//! History command implementation.
//!
//! Lists the most recent result files in a directory.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::Tabled;

use bondval_ext_file::{clamp_history_count, list_recent_outputs, ValuationFile};

use crate::cli::OutputFormat;
use crate::commands::Context;
use crate::output::{print_info, print_json, print_output};

/// Arguments for the history command.
#[derive(Args, Debug)]
pub struct HistoryArgs {
    /// Directory holding result files
    pub dir: PathBuf,

    /// Number of files to list (1-20, defaults to the configured count)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,
}

/// One result file, as shown in a table.
#[derive(Debug, Serialize, Tabled)]
struct HistoryRow {
    #[tabled(rename = "File")]
    file: String,
    #[tabled(rename = "Modified (UTC)")]
    modified: String,
    #[tabled(rename = "Size")]
    size_bytes: u64,
    #[tabled(rename = "Bonds")]
    bonds: String,
    #[tabled(rename = "Total PV")]
    total_present_value: String,
}

impl From<&ValuationFile> for HistoryRow {
    fn from(file: &ValuationFile) -> Self {
        let (bonds, total) = match &file.results {
            Some(results) => {
                let total: Decimal = results.iter().map(|r| r.present_value).sum();
                (results.len().to_string(), format!("{total:.2}"))
            }
            None => ("unreadable".to_string(), "-".to_string()),
        };
        Self {
            file: file.file_name.clone(),
            modified: file.last_modified.format("%Y-%m-%d %H:%M:%S").to_string(),
            size_bytes: file.size_bytes,
            bonds,
            total_present_value: total,
        }
    }
}

/// Execute the history command.
pub fn execute(args: HistoryArgs, ctx: &Context) -> Result<()> {
    let requested = args.count.unwrap_or(ctx.config.history_count);
    let count = clamp_history_count(requested);

    let files = list_recent_outputs(
        &args.dir,
        &ctx.config.output_prefix,
        count,
        ctx.delimiter(),
    )?;

    if ctx.format == OutputFormat::Json {
        print_json(&files)?;
        return Ok(());
    }

    if ctx.chatty() && count != requested {
        print_info(&format!("Count clamped to {count}"));
    }
    let rows: Vec<HistoryRow> = files.iter().map(HistoryRow::from).collect();
    print_output(&rows, ctx.format, ctx.delimiter())?;

    Ok(())
}
