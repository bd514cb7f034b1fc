//! File adapter errors.

use thiserror::Error;

/// File adapter result type.
pub type FileResult<T> = Result<T, FileError>;

/// Errors raised while reading or writing files.
///
/// Row-level mapping failures are not errors here; they are reported per
/// row alongside the rows that did map.
#[derive(Debug, Error)]
pub enum FileError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The delimited text could not be read or written.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A position file had no row that mapped to a bond record.
    #[error("File contains no valid bond records ({rows} rows read)")]
    NoValidRecords {
        /// Number of data rows in the file.
        rows: usize,
    },
}
