//! Result file naming and listing.

use std::fs::{self, File};
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use bondval_core::ValuationResult;

use crate::error::FileResult;
use crate::results::read_results;

/// Prefix given to result files.
pub const DEFAULT_OUTPUT_PREFIX: &str = "bonds_valued_";

/// Upper bound on the number of files returned by [`list_recent_outputs`].
pub const MAX_HISTORY_COUNT: usize = 20;

/// Name of the result file for a position file: `{prefix}{file name}`.
///
/// Directory components of `input_name` are dropped.
pub fn output_file_name(input_name: &str, prefix: &str) -> String {
    let file_name = Path::new(input_name)
        .file_name()
        .map_or_else(|| input_name.into(), |name| name.to_string_lossy());
    format!("{prefix}{file_name}")
}

/// Prepends a `yyyyMMdd_HHmmss_` UTC timestamp to a file name.
pub fn timestamped_name(name: &str, at: DateTime<Utc>) -> String {
    format!("{}_{name}", at.format("%Y%m%d_%H%M%S"))
}

/// Clamps a requested history size to `1..=MAX_HISTORY_COUNT`.
pub fn clamp_history_count(count: usize) -> usize {
    count.clamp(1, MAX_HISTORY_COUNT)
}

/// A result file found on disk.
#[derive(Debug, Clone, Serialize)]
pub struct ValuationFile {
    /// File name without directory.
    pub file_name: String,
    /// Full path.
    pub path: PathBuf,
    /// Last modification time.
    pub last_modified: DateTime<Utc>,
    /// Size in bytes.
    pub size_bytes: u64,
    /// Parsed results, `None` if the file could not be parsed.
    pub results: Option<Vec<ValuationResult>>,
}

/// Lists the most recently modified result files in `dir`, newest first.
///
/// Only regular files whose name starts with `prefix` are considered. The
/// number returned is clamped with [`clamp_history_count`]. A file that fails
/// to parse is still listed, with `results` left empty.
pub fn list_recent_outputs(
    dir: &Path,
    prefix: &str,
    count: usize,
    delimiter: u8,
) -> FileResult<Vec<ValuationFile>> {
    let mut candidates = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let metadata = entry.metadata()?;
        if !metadata.is_file() {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy().into_owned();
        if !file_name.starts_with(prefix) {
            continue;
        }
        let last_modified: DateTime<Utc> = metadata.modified()?.into();
        candidates.push((file_name, entry.path(), last_modified, metadata.len()));
    }

    candidates.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| b.0.cmp(&a.0)));
    candidates.truncate(clamp_history_count(count));

    Ok(candidates
        .into_iter()
        .map(|(file_name, path, last_modified, size_bytes)| {
            let results = match parse_file(&path, delimiter) {
                Ok(results) => Some(results),
                Err(err) => {
                    warn!(file = %path.display(), error = %err, "Could not parse results");
                    None
                }
            };
            ValuationFile {
                file_name,
                path,
                last_modified,
                size_bytes,
                results,
            }
        })
        .collect())
}

fn parse_file(path: &Path, delimiter: u8) -> FileResult<Vec<ValuationResult>> {
    let file = File::open(path)?;
    read_results(BufReader::new(file), delimiter)
}
