//! Statistics entity: rolling pomodoro counters and the day streak.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Rolling counters maintained by the completion and rollover reactions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    /// Pomodoros completed since the last day rollover.
    pub daily_pomodoros: u32,
    pub weekly_pomodoros: u32,
    /// Credited focus time in minutes.
    pub total_focus_time: u32,
    /// Consecutive calendar days with at least one completed pomodoro.
    pub current_streak: u32,
    /// When the counters were last touched by a dated reaction; the day
    /// rollover rule compares its calendar date against the clock.
    pub last_update: DateTime<Utc>,
}

impl Stats {
    /// Zeroed counters anchored at `now`.
    pub fn initial(now: DateTime<Utc>) -> Self {
        Self {
            daily_pomodoros: 0,
            weekly_pomodoros: 0,
            total_focus_time: 0,
            current_streak: 0,
            last_update: now,
        }
    }

    /// Returns new stats with the patch's set fields overwriting these.
    pub fn apply(&self, patch: &StatsPatch) -> Stats {
        let mut next = self.clone();
        if let Some(v) = patch.daily_pomodoros {
            next.daily_pomodoros = v;
        }
        if let Some(v) = patch.weekly_pomodoros {
            next.weekly_pomodoros = v;
        }
        if let Some(v) = patch.total_focus_time {
            next.total_focus_time = v;
        }
        if let Some(v) = patch.current_streak {
            next.current_streak = v;
        }
        if let Some(v) = patch.last_update {
            next.last_update = v;
        }
        next
    }
}

/// Optional-fields patch merged by [`Stats::apply`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatsPatch {
    pub daily_pomodoros: Option<u32>,
    pub weekly_pomodoros: Option<u32>,
    pub total_focus_time: Option<u32>,
    pub current_streak: Option<u32>,
    pub last_update: Option<DateTime<Utc>>,
}
