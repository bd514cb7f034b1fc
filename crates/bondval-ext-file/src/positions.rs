//! Position file ingestion.

use std::io::Read;

use serde::Serialize;
use tracing::{debug, warn};

use bondval_core::{map_row_with, MappingOptions, RawRow, RowFailure};

use crate::error::{FileError, FileResult};

/// Reads a delimited position file into raw rows.
///
/// The first record is the header. Header names and field values are
/// trimmed, records may be shorter or longer than the header, and blank
/// lines are skipped. Columns missing from a short record are simply absent
/// from its row. Bytes that are not valid UTF-8 are replaced with U+FFFD.
pub fn read_rows<R: Read>(input: R, delimiter: u8) -> FileResult<Vec<RawRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers: Vec<String> = reader
        .byte_headers()?
        .iter()
        .map(|h| {
            String::from_utf8_lossy(h)
                .trim_start_matches('\u{feff}')
                .trim()
                .to_string()
        })
        .collect();

    let mut rows = Vec::new();
    for (idx, record) in reader.byte_records().enumerate() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .map(String::as_str)
            .zip(record.iter().map(String::from_utf8_lossy))
            .collect();
        if std::str::from_utf8(record.as_slice()).is_err() {
            warn!(row = idx + 1, "Row is not valid UTF-8, undecodable bytes replaced");
        }
        rows.push(row);
    }

    debug!(rows = rows.len(), columns = headers.len(), "Read position file");
    Ok(rows)
}

/// Result of checking a position file.
#[derive(Debug, Clone, Serialize)]
pub struct InputValidation {
    /// Number of data rows read.
    pub total_rows: usize,
    /// Number of rows that mapped to a bond record.
    pub valid_rows: usize,
    /// Rows that failed to map.
    pub failures: Vec<RowFailure>,
}

/// Checks that a position file can be read and holds at least one valid row.
///
/// Rows that fail to map are returned as failures; the check only errors
/// when the file cannot be read or not a single row maps.
pub fn validate_input<R: Read>(
    input: R,
    delimiter: u8,
    options: &MappingOptions,
) -> FileResult<InputValidation> {
    let rows = read_rows(input, delimiter)?;

    let mut valid_rows = 0;
    let mut failures = Vec::new();
    for (idx, row) in rows.iter().enumerate() {
        match map_row_with(row, options) {
            Ok(_) => valid_rows += 1,
            Err(err) => failures.push(RowFailure::new(idx + 1, row, err)),
        }
    }

    if valid_rows == 0 {
        return Err(FileError::NoValidRecords { rows: rows.len() });
    }

    Ok(InputValidation {
        total_rows: rows.len(),
        valid_rows,
        failures,
    })
}
