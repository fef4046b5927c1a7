use std::io::Write;
use std::time::Duration;

use clap::Subcommand;
use pomoflow_core::{Action, TimerMode};

use crate::common;

#[derive(Subcommand)]
pub enum TimerAction {
    /// Start or resume the current phase
    Start,
    /// Pause the running timer
    Pause,
    /// Switch phase: work, short-break, long-break
    Mode { mode: String },
    /// Reset to an idle work phase
    Reset,
    /// Attach a task to upcoming work phases
    Select { task_id: String },
    /// Detach the current task
    Clear,
    /// Print the timer state
    Status {
        #[arg(long)]
        json: bool,
    },
    /// Tick the timer in the foreground until it stops
    Run,
}

fn parse_mode(raw: &str) -> Result<TimerMode, Box<dyn std::error::Error>> {
    match raw {
        "work" => Ok(TimerMode::Work),
        "short-break" => Ok(TimerMode::ShortBreak),
        "long-break" => Ok(TimerMode::LongBreak),
        other => Err(format!("unknown mode '{other}' (work, short-break, long-break)").into()),
    }
}

pub fn run(action: TimerAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = common::open_store()?;
    match action {
        TimerAction::Start => {
            if store.state().timer.is_active {
                println!("already running");
            } else {
                store.dispatch(Action::ToggleTimer)?;
                common::print_status(store.state());
            }
        }
        TimerAction::Pause => {
            if !store.state().timer.is_active {
                println!("not running");
            } else {
                store.dispatch(Action::ToggleTimer)?;
                common::print_status(store.state());
            }
        }
        TimerAction::Mode { mode } => {
            store.dispatch(Action::SelectMode(parse_mode(&mode)?))?;
            common::print_status(store.state());
        }
        TimerAction::Reset => {
            store.dispatch(Action::ResetTimer)?;
            common::print_status(store.state());
        }
        TimerAction::Select { task_id } => {
            if store.state().task(&task_id).is_none() {
                return Err(format!("no task with id {task_id}").into());
            }
            store.dispatch(Action::SetCurrentTask(Some(task_id)))?;
            common::print_status(store.state());
        }
        TimerAction::Clear => {
            store.dispatch(Action::SetCurrentTask(None))?;
            common::print_status(store.state());
        }
        TimerAction::Status { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&store.state().timer)?);
            } else {
                common::print_status(store.state());
            }
        }
        TimerAction::Run => {
            if !store.state().timer.is_active {
                store.dispatch(Action::ToggleTimer)?;
            }
            while store.state().timer.is_active {
                std::thread::sleep(Duration::from_secs(1));
                store.dispatch(Action::Tick)?;
                let timer = &store.state().timer;
                print!(
                    "\r{} {}   ",
                    common::mode_label(timer.mode),
                    common::format_clock(timer.time_left)
                );
                std::io::stdout().flush()?;
            }
            println!();
            common::print_status(store.state());
        }
    }
    Ok(())
}
