//! Settings entity: durations and auto-start/sound preferences.

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;

/// User preferences. Singleton, mutated only via partial merge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Work phase length in minutes.
    pub work_duration: u32,
    /// Short break length in minutes.
    pub short_break_duration: u32,
    /// Long break length in minutes.
    pub long_break_duration: u32,
    pub auto_start_breaks: bool,
    pub auto_start_pomodoros: bool,
    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            work_duration: 25,
            short_break_duration: 5,
            long_break_duration: 15,
            auto_start_breaks: true,
            auto_start_pomodoros: false,
            sound_enabled: true,
        }
    }
}

/// Optional-fields patch merged by [`Settings::apply`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub work_duration: Option<u32>,
    pub short_break_duration: Option<u32>,
    pub long_break_duration: Option<u32>,
    pub auto_start_breaks: Option<bool>,
    pub auto_start_pomodoros: Option<bool>,
    pub sound_enabled: Option<bool>,
}

impl SettingsPatch {
    /// Durations must stay positive.
    ///
    /// # Errors
    /// Returns `InvalidPayload` for any duration of zero minutes.
    pub fn validate(&self) -> Result<(), DispatchError> {
        let durations = [
            ("work_duration", self.work_duration),
            ("short_break_duration", self.short_break_duration),
            ("long_break_duration", self.long_break_duration),
        ];
        for (field, value) in durations {
            if value == Some(0) {
                return Err(DispatchError::InvalidPayload {
                    field,
                    message: "duration must be at least one minute".into(),
                });
            }
        }
        Ok(())
    }
}

impl Settings {
    /// Returns new settings with the patch's set fields overwriting these.
    pub fn apply(&self, patch: &SettingsPatch) -> Settings {
        let mut next = self.clone();
        if let Some(v) = patch.work_duration {
            next.work_duration = v;
        }
        if let Some(v) = patch.short_break_duration {
            next.short_break_duration = v;
        }
        if let Some(v) = patch.long_break_duration {
            next.long_break_duration = v;
        }
        if let Some(v) = patch.auto_start_breaks {
            next.auto_start_breaks = v;
        }
        if let Some(v) = patch.auto_start_pomodoros {
            next.auto_start_pomodoros = v;
        }
        if let Some(v) = patch.sound_enabled {
            next.sound_enabled = v;
        }
        next
    }
}
