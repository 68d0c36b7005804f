//! Feeding word datasets into a dictionary.
//!
//! Thin I/O glue around [`Dictionary::put`] for the two dataset shapes the
//! benchmarks use: plain word lists with one key per line, and keyed CSV
//! exports with `id,text` rows (such as the screen-summaries dataset).
//! Word-list records are valued with their 1-based ordinal; keyed records
//! with their id column.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use thiserror::Error;

use crate::{Dictionary, DictionaryError};

/// Errors from reading a dataset into a dictionary.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: malformed record: {reason}")]
    BadRecord { line: u64, reason: String },

    #[error(transparent)]
    Dictionary(#[from] DictionaryError),
}

/// The on-disk shapes a dataset can come in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetFormat {
    /// One key per line; blank lines are skipped.
    WordList,
    /// `id,text` rows with a header line; keyed by `text`, valued by `id`.
    KeyedCsv,
}

/// Read up to `limit` records from `path` and hand each `(key, value)` pair
/// to `visit`. Returns the number of records visited.
pub fn visit_records<F>(
    path: &Path,
    format: DatasetFormat,
    limit: u64,
    mut visit: F,
) -> Result<u64, LoadError>
where
    F: FnMut(&str, u64) -> Result<(), LoadError>,
{
    let reader = BufReader::new(File::open(path)?);
    let mut visited = 0u64;
    let mut line_no = 0u64;

    for line in reader.lines() {
        let line = line?;
        line_no += 1;

        if format == DatasetFormat::KeyedCsv && line_no == 1 {
            // Header row.
            continue;
        }
        if visited >= limit {
            break;
        }

        match format {
            DatasetFormat::WordList => {
                let word = line.trim();
                if word.is_empty() {
                    continue;
                }
                visited += 1;
                visit(word, visited)?;
            }
            DatasetFormat::KeyedCsv => {
                let Some((id, text)) = line.split_once(',') else {
                    return Err(LoadError::BadRecord {
                        line: line_no,
                        reason: "expected `id,text`".into(),
                    });
                };
                let id: u64 = id.trim().parse().map_err(|_| LoadError::BadRecord {
                    line: line_no,
                    reason: format!("id `{}` is not a number", id.trim()),
                })?;

                let text = text.trim();
                if text.is_empty() {
                    debug!("skipping line {line_no}: empty text column");
                    continue;
                }
                visited += 1;
                visit(text, id)?;
            }
        }
    }

    Ok(visited)
}

/// Load up to `limit` records from `path` into `dict`. Returns the number of
/// records handed to `put`; keys repeated in the dataset overwrite.
pub fn load_dataset<D>(
    path: &Path,
    format: DatasetFormat,
    limit: u64,
    dict: &mut D,
) -> Result<u64, LoadError>
where
    D: Dictionary<u64>,
{
    let loaded = visit_records(path, format, limit, |key, value| {
        dict.put(key, value)?;
        Ok(())
    })?;

    info!("loaded {loaded} records from {}", path.display());
    Ok(loaded)
}
