use std::io::{self, Write};
use std::time::Duration;

use color_eyre::Result;
use crossterm::cursor::MoveTo;
use crossterm::execute;
use crossterm::terminal::{Clear, ClearType};
use tracing::info;

use crate::format;
use crate::sink::{self, LogPaths};
use crate::sort::{self, SortKey};
use crate::system::collector::Collector;
use crate::system::sample::SnapshotBatch;

/// Everything a monitoring run needs, fixed at invocation time. The sort
/// key lives here rather than in any shared state: whoever starts the loop
/// passes the key in, and it is never re-read mid-run.
#[derive(Clone, Copy, Debug)]
pub struct MonitorOptions {
    pub sort: SortKey,
    pub refresh: Duration,
    /// Bound for scripted runs; `None` runs until interrupted.
    pub max_cycles: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopReason {
    Interrupted,
    CyclesExhausted,
}

/// The sampling-and-logging loop: capture, sort, render, persist, sleep,
/// repeat. Ctrl+C is only observed between iterations (or during a sleep),
/// so an in-flight cycle always finishes its writes and no log file is
/// left mid-block.
pub async fn run(
    collector: &mut Collector,
    paths: &LogPaths,
    options: MonitorOptions,
) -> Result<StopReason> {
    info!(
        sort = options.sort.label(),
        refresh_secs = options.refresh.as_secs(),
        "monitoring started"
    );

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    // The collector primed its CPU baseline at construction; the first
    // capture needs a minimum gap before the deltas mean anything.
    tokio::select! {
        _ = &mut ctrl_c => return Ok(StopReason::Interrupted),
        _ = tokio::time::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL) => {}
    }

    let mut cycles = 0usize;
    loop {
        let mut batch = collector.capture();
        sort::sort_batch(&mut batch.samples, options.sort);

        render(&batch, options.refresh)?;
        sink::write_all(paths, &batch.to_log_batch());

        cycles += 1;
        if let Some(limit) = options.max_cycles
            && cycles >= limit
        {
            info!(cycles, "cycle limit reached");
            return Ok(StopReason::CyclesExhausted);
        }

        tokio::select! {
            _ = &mut ctrl_c => {
                info!(cycles, "interrupted");
                return Ok(StopReason::Interrupted);
            }
            _ = tokio::time::sleep(options.refresh) => {}
        }
    }
}

pub fn clear_screen() -> io::Result<()> {
    execute!(io::stdout(), MoveTo(0, 0), Clear(ClearType::All))
}

/// Full-screen console refresh: clear, header, rule, one row per sample,
/// countdown notice. Only here are names truncated (to 24 display
/// columns); the persisted logs keep them in full.
fn render(batch: &SnapshotBatch, refresh: Duration) -> Result<()> {
    let mut out = io::stdout();
    execute!(out, MoveTo(0, 0), Clear(ClearType::All))?;

    writeln!(out, "{}", format::header_row())?;
    writeln!(out, "{}", format::separator())?;
    for sample in &batch.samples {
        let name = format::truncate_display(&sample.name, format::NAME_DISPLAY_WIDTH);
        let mem = format::format_bytes(sample.memory_bytes);
        writeln!(
            out,
            "{}",
            format::sample_row(
                sample.pid,
                &name,
                sample.threads,
                f64::from(sample.cpu_percent),
                &mem,
            )
        )?;
    }
    writeln!(
        out,
        "\nRefreshing in {} s. Press Ctrl+C to stop.",
        refresh.as_secs()
    )?;
    out.flush()?;
    Ok(())
}
