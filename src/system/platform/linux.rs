use super::PlatformExtensions;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn thread_count(pid: u32) -> Option<usize> {
        // Each thread of a process has an entry under /proc/{pid}/task.
        // The directory disappears with the process, so a failed read just
        // means the pid is gone (or unreadable) and the caller drops it.
        let path = format!("/proc/{pid}/task");
        let entries = std::fs::read_dir(path).ok()?;
        let count = entries.filter_map(|e| e.ok()).count();
        if count == 0 { None } else { Some(count) }
    }
}
