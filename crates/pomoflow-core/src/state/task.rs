//! Task entity: a unit of work measured in pomodoros.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DispatchError;

/// A task tracked against completed work phases.
///
/// `completed_pomodoros` is not clamped to `pomodoros`: the user may keep
/// working a finished task and the counter keeps counting. `completed` is
/// re-derived from the counters whenever they move without an explicit
/// flag in the patch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub completed: bool,
    /// Target number of pomodoros.
    pub pomodoros: u32,
    pub completed_pomodoros: u32,
}

impl Task {
    /// Create a task with a fresh id and zeroed progress.
    ///
    /// # Errors
    /// Returns `InvalidPayload` for a blank title or a zero target.
    pub fn new(title: &str, pomodoros: u32) -> Result<Self, DispatchError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(DispatchError::InvalidPayload {
                field: "title",
                message: "title must not be empty".into(),
            });
        }
        if pomodoros == 0 {
            return Err(DispatchError::InvalidPayload {
                field: "pomodoros",
                message: "target must be at least one pomodoro".into(),
            });
        }
        Ok(Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            completed: false,
            pomodoros,
            completed_pomodoros: 0,
        })
    }

    /// Returns a new task with the patch's set fields overwriting this one.
    ///
    /// When a counter moves and the patch carries no explicit `completed`
    /// flag, the flag is recomputed as `completed_pomodoros >= pomodoros`.
    pub fn apply(&self, patch: &TaskPatch) -> Task {
        let mut next = self.clone();
        if let Some(title) = &patch.title {
            next.title = title.clone();
        }
        if let Some(pomodoros) = patch.pomodoros {
            next.pomodoros = pomodoros;
        }
        if let Some(completed_pomodoros) = patch.completed_pomodoros {
            next.completed_pomodoros = completed_pomodoros;
        }
        match patch.completed {
            Some(flag) => next.completed = flag,
            None if patch.completed_pomodoros.is_some() || patch.pomodoros.is_some() => {
                next.completed = next.completed_pomodoros >= next.pomodoros;
            }
            None => {}
        }
        next
    }
}

/// Optional-fields patch merged by [`Task::apply`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub completed: Option<bool>,
    pub pomodoros: Option<u32>,
    pub completed_pomodoros: Option<u32>,
}

impl TaskPatch {
    /// # Errors
    /// Returns `InvalidPayload` for a blank title or a zero target.
    pub fn validate(&self) -> Result<(), DispatchError> {
        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(DispatchError::InvalidPayload {
                    field: "title",
                    message: "title must not be empty".into(),
                });
            }
        }
        if self.pomodoros == Some(0) {
            return Err(DispatchError::InvalidPayload {
                field: "pomodoros",
                message: "target must be at least one pomodoro".into(),
            });
        }
        Ok(())
    }
}
