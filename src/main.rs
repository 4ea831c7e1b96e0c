use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use proclog::config::{Config, load_config, load_config_from_path};
use proclog::menu;
use proclog::monitor::{self, MonitorOptions};
use proclog::sink;
use proclog::sort::SortKey;
use proclog::system::collector::Collector;

#[derive(Parser)]
#[command(
    name = "proclog",
    about = "Periodic process monitor that logs every sample to text, CSV, and JSON"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Refresh interval in seconds
    #[arg(long)]
    refresh: Option<u64>,

    /// Sort key: none, cpu, memory, threads
    #[arg(long)]
    sort: Option<String>,

    /// Directory holding the three log files
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Skip the menu and start monitoring immediately
    #[arg(long, default_value_t = false)]
    monitor: bool,

    /// Stop after this many cycles (0 = run until interrupted)
    #[arg(long, default_value_t = 0)]
    cycles: usize,

    /// Truncate all three log files and exit
    #[arg(long, default_value_t = false)]
    clear_logs: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;
    // Diagnostics go to stderr; stdout belongs to the process table.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);
    let paths = config.logs.paths();

    if cli.clear_logs {
        for (path, result) in sink::clear_all(&paths) {
            match result {
                Ok(()) => println!("[OK] Cleared: {}", path.display()),
                Err(err) => eprintln!("[Error] Could not clear {}: {err}", path.display()),
            }
        }
        return Ok(());
    }

    if cli.monitor {
        let mut collector = Collector::new();
        let options = MonitorOptions {
            sort: SortKey::from_str_config(&config.general.default_sort),
            refresh: Duration::from_secs(config.general.refresh_secs),
            max_cycles: (cli.cycles > 0).then_some(cli.cycles),
        };
        let reason = monitor::run(&mut collector, &paths, options).await?;
        tracing::info!(?reason, "monitoring finished");
        return Ok(());
    }

    menu::run(&config).await
}

fn load_config_for_cli(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(refresh) = cli.refresh {
        config.general.refresh_secs = refresh;
    }
    if let Some(ref sort) = cli.sort {
        config.general.default_sort = sort.clone();
    }
    if let Some(ref dir) = cli.log_dir {
        config.logs.directory = dir.clone();
    }

    config
}
