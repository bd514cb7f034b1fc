//! # Bondval Ext File
//!
//! Delimited-file adapter for the Bondval valuation core.
//!
//! This crate owns the file envelope around the core:
//! - Reading semicolon-delimited position files into raw rows
//! - Checking a position file before it is queued for valuation
//! - Writing and reading back valuation result files
//! - Naming result files and listing the most recent ones in a directory

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod outputs;
mod positions;
mod results;

pub use error::{FileError, FileResult};
pub use outputs::{
    clamp_history_count, list_recent_outputs, output_file_name, timestamped_name,
    ValuationFile, DEFAULT_OUTPUT_PREFIX, MAX_HISTORY_COUNT,
};
pub use positions::{read_rows, validate_input, InputValidation};
pub use results::{read_results, write_results, RESULT_COLUMNS};

/// Field delimiter used by position and result files.
pub const DEFAULT_DELIMITER: u8 = b';';
