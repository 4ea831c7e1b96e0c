pub mod csv;
pub mod json;
pub mod text;

use std::fs::File;
use std::io;
use std::path::PathBuf;

use tracing::warn;

use crate::system::sample::LogBatch;

/// The durable contract: three files other tools may parse. Format
/// stability matters more than internal representation.
#[derive(Clone, Debug)]
pub struct LogPaths {
    pub text: PathBuf,
    pub csv: PathBuf,
    pub json: PathBuf,
}

/// Append one cycle's batch to all three sinks. Each sink fails on its
/// own: a CSV write error must not cost the text or JSON entry for the
/// same cycle, and never the loop.
pub fn write_all(paths: &LogPaths, batch: &LogBatch) {
    if let Err(err) = text::append(&paths.text, batch) {
        warn!(sink = "text", path = %paths.text.display(), %err, "log append failed");
    }
    if let Err(err) = csv::append(&paths.csv, batch) {
        warn!(sink = "csv", path = %paths.csv.display(), %err, "log append failed");
    }
    if let Err(err) = json::append(&paths.json, batch) {
        warn!(sink = "json", path = %paths.json.display(), %err, "log append failed");
    }
}

/// Truncate all three log files to empty, creating any that are missing.
/// Per-file results so the caller can report each outcome; the next write
/// rebuilds headers/structure from scratch.
pub fn clear_all(paths: &LogPaths) -> Vec<(PathBuf, io::Result<()>)> {
    [&paths.text, &paths.csv, &paths.json]
        .into_iter()
        .map(|path| (path.clone(), File::create(path).map(|_| ())))
        .collect()
}
