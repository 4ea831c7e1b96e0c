use std::fs;
use std::path::Path;

use color_eyre::Result;

use crate::system::sample::LogBatch;

/// The file holds one JSON array of `{timestamp, processes}` entries, one
/// per cycle. Each append re-reads the array, pushes, and rewrites the
/// whole file pretty-printed — O(total log size) per call, a deliberate
/// simplicity-over-performance tradeoff that keeps the log a single
/// human-inspectable document.
///
/// Unparsable content (or valid JSON that is not an array) degrades to an
/// empty history: the old entries are discarded and logging continues.
pub fn append(path: &Path, batch: &LogBatch) -> Result<()> {
    let mut history: Vec<LogBatch> = match fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents).unwrap_or_default(),
        Err(_) => Vec::new(),
    };

    history.push(batch.clone());
    fs::write(path, serde_json::to_string_pretty(&history)?)?;
    Ok(())
}
