//! The combined-state data model.
//!
//! Four sibling entities under one root: timer, settings, tasks, stats.
//! Entities reference each other by id only (`timer.current_task`); no
//! entity embeds another. Every mutation goes through a pure `apply` that
//! merges an optional-fields patch into a new value.

mod settings;
mod stats;
mod task;
mod timer;

pub use settings::{Settings, SettingsPatch};
pub use stats::{Stats, StatsPatch};
pub use task::{Task, TaskPatch};
pub use timer::{TimerMode, TimerPatch, TimerState};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The combined snapshot the dispatch core publishes after every accepted
/// operation. Treated as immutable once published; each dispatch produces
/// a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppState {
    pub timer: TimerState,
    pub settings: Settings,
    /// Insertion-ordered; "first incomplete" scans rely on this.
    pub tasks: Vec<Task>,
    pub stats: Stats,
}

impl AppState {
    /// Documented first-launch defaults: idle work phase at 25 minutes,
    /// default settings, zeroed stats anchored at `now`, no tasks.
    pub fn initial(now: DateTime<Utc>) -> Self {
        Self {
            timer: TimerState::default(),
            settings: Settings::default(),
            tasks: Vec::new(),
            stats: Stats::initial(now),
        }
    }

    /// Task lookup by id.
    pub fn task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// First incomplete task in insertion order.
    pub fn first_incomplete_task(&self) -> Option<&Task> {
        self.tasks.iter().find(|t| !t.completed)
    }
}
