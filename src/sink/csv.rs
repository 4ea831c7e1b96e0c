use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::system::sample::LogBatch;

const HEADER: &str = "Timestamp,PID,Name,Threads,CPU %,Memory";

/// Append one row per record. The header is written when the file is
/// missing or empty, so a cleared log regains it on the next cycle — and
/// exactly once: appends to a non-empty file never repeat it.
pub fn append(path: &Path, batch: &LogBatch) -> io::Result<()> {
    let needs_header = match fs::metadata(path) {
        Ok(meta) => meta.len() == 0,
        Err(_) => true,
    };

    let file = OpenOptions::new().append(true).create(true).open(path)?;
    let mut writer = BufWriter::new(file);

    if needs_header {
        writeln!(writer, "{HEADER}")?;
    }
    for record in &batch.processes {
        writeln!(
            writer,
            "{},{},{},{},{:.1},{}",
            escape(&batch.timestamp),
            record.pid,
            escape(&record.name),
            record.threads,
            record.cpu,
            escape(&record.mem),
        )?;
    }

    writer.flush()
}

/// Quote a field if it holds a comma, quote, or newline; inner quotes are
/// doubled per RFC 4180.
fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
