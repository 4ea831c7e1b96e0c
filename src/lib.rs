//! Periodic process monitor: sample every visible process at a fixed
//! interval, show a sorted fixed-width table, and append each cycle to
//! three durable logs (text, CSV, JSON).

pub mod config;
pub mod format;
pub mod menu;
pub mod monitor;
pub mod sink;
pub mod sort;
pub mod system;
