//! Shared plumbing for CLI commands.

use std::io::Write;

use pomoflow_core::{AppState, NotificationSink, SqliteStateStore, Store, TimerMode};

/// Rings the terminal bell on phase completion.
struct TerminalBell;

impl NotificationSink for TerminalBell {
    fn play_completion_sound(&self) -> Result<(), Box<dyn std::error::Error>> {
        print!("\x07");
        std::io::stdout().flush()?;
        Ok(())
    }
}

/// Open the persisted store, falling back to first-launch defaults.
pub fn open_store() -> Result<Store, Box<dyn std::error::Error>> {
    let backend = SqliteStateStore::open()?;
    let store = Store::load_or_default(Box::new(backend))?.with_sink(Box::new(TerminalBell));
    Ok(store)
}

pub fn mode_label(mode: TimerMode) -> &'static str {
    match mode {
        TimerMode::Work => "work",
        TimerMode::ShortBreak => "short break",
        TimerMode::LongBreak => "long break",
    }
}

pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

pub fn print_status(state: &AppState) {
    let timer = &state.timer;
    let running = if timer.is_active { "running" } else { "paused" };
    let task = timer
        .current_task
        .as_deref()
        .and_then(|id| state.task(id))
        .map(|t| t.title.as_str())
        .unwrap_or("none");
    println!(
        "{} {} ({running}), task: {task}",
        mode_label(timer.mode),
        format_clock(timer.time_left),
    );
}
