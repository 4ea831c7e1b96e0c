use serde::{Deserialize, Serialize};

use crate::format::format_bytes;

/// Timestamp layout shared by the console header and all three log sinks.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One process's metrics at one instant. Names are kept in full here;
/// only console rendering truncates them.
#[derive(Clone, Debug)]
pub struct ProcessSample {
    pub pid: u32,
    pub name: String,
    pub threads: usize,
    pub cpu_percent: f32,
    pub memory_bytes: u64,
}

/// All samples captured under one timestamp. Created fresh each cycle,
/// immutable once sorted, discarded after render and persist.
#[derive(Clone, Debug)]
pub struct SnapshotBatch {
    pub timestamp: String,
    pub samples: Vec<ProcessSample>,
}

/// The persisted form of one sample: raw byte counts are gone, memory is
/// the display string and cpu is rounded to one decimal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub pid: u32,
    pub name: String,
    pub threads: usize,
    pub cpu: f32,
    pub mem: String,
}

/// One cycle's entry as every sink sees it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct LogBatch {
    pub timestamp: String,
    pub processes: Vec<LogRecord>,
}

impl SnapshotBatch {
    /// Strip the batch for persistence. This is the single place raw
    /// memory values are dropped, so all three sinks see identical data.
    pub fn to_log_batch(&self) -> LogBatch {
        let processes = self
            .samples
            .iter()
            .map(|sample| LogRecord {
                pid: sample.pid,
                name: sample.name.clone(),
                threads: sample.threads,
                cpu: (sample.cpu_percent * 10.0).round() / 10.0,
                mem: format_bytes(sample.memory_bytes),
            })
            .collect();

        LogBatch {
            timestamp: self.timestamp.clone(),
            processes,
        }
    }
}
