//! Timer entity: the current phase, its countdown, and the attached task.

use serde::{Deserialize, Serialize};

use super::settings::Settings;

/// The timer's current phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TimerMode {
    Work,
    ShortBreak,
    LongBreak,
}

impl TimerMode {
    /// Configured duration of this phase in seconds.
    pub fn duration_secs(&self, settings: &Settings) -> u32 {
        let minutes = match self {
            TimerMode::Work => settings.work_duration,
            TimerMode::ShortBreak => settings.short_break_duration,
            TimerMode::LongBreak => settings.long_break_duration,
        };
        minutes.saturating_mul(60)
    }

    /// Phase seated when a timer of this mode runs out.
    ///
    /// Work alternates with the short break; the long break is only entered
    /// by explicit selection.
    pub fn next(&self) -> TimerMode {
        match self {
            TimerMode::Work => TimerMode::ShortBreak,
            TimerMode::ShortBreak | TimerMode::LongBreak => TimerMode::Work,
        }
    }
}

/// Timer entity state.
///
/// `current_task`, when set, references a task by id. The reference is
/// repaired by the task reactions when the task completes or is deleted,
/// not enforced structurally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimerState {
    pub mode: TimerMode,
    /// Remaining time in seconds.
    pub time_left: u32,
    pub is_active: bool,
    pub current_task: Option<String>,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            mode: TimerMode::Work,
            time_left: 25 * 60,
            is_active: false,
            current_task: None,
        }
    }
}

/// Optional-fields patch merged by [`TimerState::apply`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimerPatch {
    pub mode: Option<TimerMode>,
    pub time_left: Option<u32>,
    pub is_active: Option<bool>,
    /// `Some(None)` clears the attached task.
    pub current_task: Option<Option<String>>,
}

impl TimerState {
    /// Returns a new state with the patch's set fields overwriting this one.
    pub fn apply(&self, patch: &TimerPatch) -> TimerState {
        let mut next = self.clone();
        if let Some(mode) = patch.mode {
            next.mode = mode;
        }
        if let Some(time_left) = patch.time_left {
            next.time_left = time_left;
        }
        if let Some(is_active) = patch.is_active {
            next.is_active = is_active;
        }
        if let Some(current_task) = &patch.current_task {
            next.current_task = current_task.clone();
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_merges_only_set_fields() {
        let state = TimerState::default();
        let next = state.apply(&TimerPatch {
            time_left: Some(60),
            ..Default::default()
        });
        assert_eq!(next.time_left, 60);
        assert_eq!(next.mode, TimerMode::Work);
        assert!(!next.is_active);
    }

    #[test]
    fn apply_can_clear_current_task() {
        let mut state = TimerState::default();
        state.current_task = Some("abc".into());
        let next = state.apply(&TimerPatch {
            current_task: Some(None),
            ..Default::default()
        });
        assert_eq!(next.current_task, None);
    }

    #[test]
    fn next_mode_alternates_work_and_short_break() {
        assert_eq!(TimerMode::Work.next(), TimerMode::ShortBreak);
        assert_eq!(TimerMode::ShortBreak.next(), TimerMode::Work);
        assert_eq!(TimerMode::LongBreak.next(), TimerMode::Work);
    }

    #[test]
    fn mode_serializes_camel_case() {
        let json = serde_json::to_string(&TimerMode::ShortBreak).unwrap();
        assert_eq!(json, r#""shortBreak""#);
    }
}
