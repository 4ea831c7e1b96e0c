pub trait PlatformExtensions {
    /// Thread count for a process, `None` when the process is gone or
    /// unreadable. sysinfo has no portable equivalent.
    fn thread_count(pid: u32) -> Option<usize>;
}

#[cfg(target_os = "linux")]
mod linux;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux as platform_impl;
#[cfg(target_os = "macos")]
use macos as platform_impl;
#[cfg(target_os = "windows")]
use windows as platform_impl;

pub fn thread_count(pid: u32) -> Option<usize> {
    platform_impl::Platform::thread_count(pid)
}
