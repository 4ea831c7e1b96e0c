use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::format;
use crate::system::sample::LogBatch;

/// Append one human-readable block: blank line, timestamp banner, column
/// header, rule, one fixed-width row per record. Append-only; the file is
/// only ever truncated by an explicit clear. Full names are written here —
/// rows widen past the column instead of losing characters.
pub fn append(path: &Path, batch: &LogBatch) -> io::Result<()> {
    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer)?;
    writeln!(writer, "===== Monitoring: {} =====", batch.timestamp)?;
    writeln!(writer, "{}", format::header_row())?;
    writeln!(writer, "{}", format::separator())?;
    for record in &batch.processes {
        writeln!(
            writer,
            "{}",
            format::sample_row(
                record.pid,
                &record.name,
                record.threads,
                f64::from(record.cpu),
                &record.mem,
            )
        )?;
    }

    writer.flush()
}
