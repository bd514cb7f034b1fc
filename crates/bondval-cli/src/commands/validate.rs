//! Validate command implementation.
//!
//! Checks that a position file can be read and that at least one row maps,
//! without valuing anything.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use bondval_ext_file::validate_input;

use crate::cli::OutputFormat;
use crate::commands::value::FailureRow;
use crate::commands::{open_input, Context};
use crate::output::{print_csv, print_header, print_json, print_success, print_table, KeyValue};

/// Arguments for the validate command.
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Position file to check
    pub input: PathBuf,
}

/// Execute the validate command.
pub fn execute(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let check = validate_input(
        open_input(&args.input)?,
        ctx.delimiter(),
        &ctx.config.mapping_options(),
    )?;

    match ctx.format {
        OutputFormat::Table => {
            let summary = vec![
                KeyValue::new("File", args.input.display()),
                KeyValue::new("Rows", check.total_rows),
                KeyValue::new("Valid", check.valid_rows),
                KeyValue::new("Failed", check.failures.len()),
            ];
            print_table(&summary);

            if check.failures.is_empty() {
                if !ctx.quiet {
                    print_success("All rows can be valued");
                }
            } else {
                print_header("Rejected rows");
                let failures: Vec<FailureRow> =
                    check.failures.iter().map(FailureRow::from).collect();
                print_table(&failures);
            }
        }
        OutputFormat::Json => print_json(&check)?,
        OutputFormat::Csv => print_csv(&check.failures, ctx.delimiter())?,
    }

    Ok(())
}
