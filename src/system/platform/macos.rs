use libproc::libproc::proc_pid::pidinfo;
use libproc::libproc::task_info::TaskInfo;

use super::PlatformExtensions;

pub struct Platform;

impl PlatformExtensions for Platform {
    fn thread_count(pid: u32) -> Option<usize> {
        // libproc takes a signed pid; anything above i32::MAX cannot be a
        // real macOS pid.
        if pid > i32::MAX as u32 {
            return None;
        }
        pidinfo::<TaskInfo>(pid as i32, 0)
            .ok()
            .map(|info| info.pti_threadnum as usize)
    }
}
