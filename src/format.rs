use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Display width of the process-name column on the console. The padded
/// column is one wider so adjacent columns never touch.
pub const NAME_DISPLAY_WIDTH: usize = 24;

pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

    let mut value = bytes as f64;
    for unit in &UNITS[..UNITS.len() - 1] {
        if value < 1024.0 {
            return format!("{value:.2} {unit}");
        }
        value /= 1024.0;
    }
    format!("{value:.2} TB")
}

pub fn truncate_display(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut result = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }
    result
}

pub fn header_row() -> String {
    format!(
        "{:<8} {:<25} {:<10} {:<10} {:<15}",
        "PID", "Name", "Threads", "CPU %", "Memory"
    )
}

pub fn separator() -> String {
    "-".repeat(70)
}

pub fn sample_row(pid: u32, name: &str, threads: usize, cpu_percent: f64, memory: &str) -> String {
    format!("{pid:<8} {name:<25} {threads:<10} {cpu_percent:<10.1} {memory:<15}")
}
