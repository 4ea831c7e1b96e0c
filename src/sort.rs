use std::cmp::Ordering;

use crate::system::sample::ProcessSample;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    #[default]
    None,
    Cpu,
    Memory,
    Threads,
}

impl SortKey {
    pub fn label(self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Cpu => "cpu",
            SortKey::Memory => "memory",
            SortKey::Threads => "threads",
        }
    }

    pub fn from_str_config(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "cpu" => SortKey::Cpu,
            "memory" => SortKey::Memory,
            "threads" => SortKey::Threads,
            _ => SortKey::None,
        }
    }
}

/// Order a batch in place. `slice::sort_by` is stable, so ties keep their
/// prior relative order and output stays deterministic across refreshes.
pub fn sort_batch(samples: &mut [ProcessSample], key: SortKey) {
    match key {
        SortKey::None => {}
        SortKey::Cpu => {
            samples.sort_by(|a, b| {
                b.cpu_percent
                    .partial_cmp(&a.cpu_percent)
                    .unwrap_or(Ordering::Equal)
            });
        }
        SortKey::Memory => {
            samples.sort_by(|a, b| b.memory_bytes.cmp(&a.memory_bytes));
        }
        SortKey::Threads => {
            samples.sort_by(|a, b| b.threads.cmp(&a.threads));
        }
    }
}
