//! Operations accepted by the dispatch core.
//!
//! Each action names exactly one entity store and carries its payload.
//! Reactions dispatch these same actions for their follow-up transitions.

use serde::{Deserialize, Serialize};

use crate::state::{SettingsPatch, StatsPatch, TaskPatch, TimerMode, TimerPatch};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// One second elapsed on the running timer.
    Tick,
    UpdateTimer(TimerPatch),
    /// Back to an idle work phase at the configured duration.
    ResetTimer,
    ToggleTimer,
    /// Explicit phase selection; resets the countdown and deactivates.
    SelectMode(TimerMode),
    SetCurrentTask(Option<String>),
    UpdateSettings(SettingsPatch),
    AddTask { title: String, pomodoros: u32 },
    UpdateTask { id: String, patch: TaskPatch },
    DeleteTask(String),
    UpdateStats(StatsPatch),
}

impl Action {
    /// Whether the timer reactions treat this as an "update timer"
    /// operation (the only ones that can cross the completion edge).
    pub(crate) fn is_timer_update(&self) -> bool {
        matches!(self, Action::Tick | Action::UpdateTimer(_))
    }
}
