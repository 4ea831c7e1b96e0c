use chrono::Local;
use sysinfo::{ProcessRefreshKind, ProcessesToUpdate, System};

use super::platform;
use super::sample::{ProcessSample, SnapshotBatch, TIMESTAMP_FORMAT};

pub struct Collector {
    sys: System,
}

impl Default for Collector {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector {
    /// Construction primes the CPU accounting baseline: the first refresh
    /// has nothing to diff against, so cpu deltas only mean something from
    /// the second refresh on. Callers must leave at least
    /// `sysinfo::MINIMUM_CPU_UPDATE_INTERVAL` before the first `capture`.
    pub fn new() -> Self {
        let mut sys = System::new();
        sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );
        Collector { sys }
    }

    pub fn capture(&mut self) -> SnapshotBatch {
        self.sys.refresh_processes_specifics(
            ProcessesToUpdate::All,
            true,
            ProcessRefreshKind::nothing().with_memory().with_cpu(),
        );

        let timestamp = Local::now().format(TIMESTAMP_FORMAT).to_string();

        let mut samples = Vec::with_capacity(self.sys.processes().len());
        for (pid, process) in self.sys.processes() {
            let pid_u32 = pid.as_u32();

            // A process can exit (or deny access) between sysinfo's
            // enumeration and this read. Expected churn, not an error:
            // drop the sample and keep the batch.
            let Some(threads) = platform::thread_count(pid_u32) else {
                continue;
            };

            samples.push(ProcessSample {
                pid: pid_u32,
                name: process.name().to_string_lossy().to_string(),
                threads,
                cpu_percent: process.cpu_usage(),
                memory_bytes: process.memory(),
            });
        }

        // sysinfo hands processes back in hash order; ascending pid is the
        // stable enumeration order that SortKey::None preserves.
        samples.sort_by_key(|s| s.pid);

        SnapshotBatch { timestamp, samples }
    }
}
