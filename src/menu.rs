use std::io::{self, BufRead, Write};
use std::time::Duration;

use color_eyre::Result;

use crate::config::Config;
use crate::monitor::{self, MonitorOptions, StopReason, clear_screen};
use crate::sink;
use crate::sort::SortKey;
use crate::system::collector::Collector;

/// The interactive shell: start monitoring, clear logs, choose the sort
/// key, exit. Single-threaded and blocking, so at most one loop is ever
/// active. The current sort key is a plain local here, handed to each run
/// through `MonitorOptions` — there is no shared selection state.
pub async fn run(config: &Config) -> Result<()> {
    let paths = config.logs.paths();
    let refresh = Duration::from_secs(config.general.refresh_secs);
    let mut sort = SortKey::from_str_config(&config.general.default_sort);

    let stdin = io::stdin();
    loop {
        clear_screen()?;
        println!("=== Process Monitor ===");
        println!("1. Start monitoring");
        println!("2. Clear logs");
        println!("3. Choose sort key (current: {})", sort.label());
        println!("4. Exit");
        let choice = prompt(&stdin, "Select an option (1-4): ")?;

        match choice.as_str() {
            "1" => {
                // A fresh collector per run so the CPU baseline is current.
                let mut collector = Collector::new();
                let options = MonitorOptions {
                    sort,
                    refresh,
                    max_cycles: None,
                };
                if monitor::run(&mut collector, &paths, options).await? == StopReason::Interrupted {
                    println!("\nMonitoring stopped by user.");
                    std::thread::sleep(Duration::from_secs(1));
                }
            }
            "2" => {
                for (path, result) in sink::clear_all(&paths) {
                    match result {
                        Ok(()) => println!("[OK] Cleared: {}", path.display()),
                        Err(err) => println!("[Error] Could not clear {}: {err}", path.display()),
                    }
                }
                prompt(&stdin, "\nPress Enter to return to the menu...")?;
            }
            "3" => sort = select_sort(&stdin, sort)?,
            "4" => {
                println!("Exiting.");
                return Ok(());
            }
            _ => {
                println!("Invalid choice.");
                std::thread::sleep(Duration::from_secs(1));
            }
        }
    }
}

fn select_sort(stdin: &io::Stdin, current: SortKey) -> Result<SortKey> {
    println!("\nChoose a sort key:");
    println!("1. No sorting");
    println!("2. By CPU");
    println!("3. By memory");
    println!("4. By thread count");
    let choice = prompt(stdin, "Selection (1-4): ")?;

    let next = match choice.as_str() {
        "1" => SortKey::None,
        "2" => SortKey::Cpu,
        "3" => SortKey::Memory,
        "4" => SortKey::Threads,
        _ => {
            println!("Invalid choice. Sort key unchanged.");
            current
        }
    };
    std::thread::sleep(Duration::from_secs(1));
    Ok(next)
}

fn prompt(stdin: &io::Stdin, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    stdin.lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
