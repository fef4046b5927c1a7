//! Reducer dispatch core.
//!
//! A single synchronous transition function over the combined state. Each
//! accepted operation produces a new snapshot, hands it to the persistence
//! adapter, then runs the reaction rules in order. A rule's follow-up
//! dispatch recurses into this same path and completes -- its own reactions
//! included -- before the next rule of the outer dispatch runs, so chained
//! transitions form a depth-first synchronous call tree.
//!
//! Single-threaded by design: the host's tick source must not dispatch
//! concurrently, and no dispatch suspends.

use chrono::{DateTime, Utc};

use crate::action::Action;
use crate::clock::{Clock, SystemClock};
use crate::error::{CoreError, DispatchError};
use crate::notify::{NotificationSink, NullSink};
use crate::reactions::{builtin_reactions, Reaction};
use crate::state::{AppState, Task, TimerMode};
use crate::storage::StateStore;

/// The state owner. Constructed explicitly and passed by reference to
/// whatever drives it; there is no ambient global.
pub struct Store {
    state: AppState,
    reactions: Vec<Reaction>,
    clock: Box<dyn Clock>,
    sink: Box<dyn NotificationSink>,
    persistence: Option<Box<dyn StateStore>>,
}

impl Store {
    /// Store over the given snapshot with the built-in reaction rules,
    /// the system clock, a silent sink, and no persistence.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            reactions: builtin_reactions(),
            clock: Box::new(SystemClock),
            sink: Box::new(NullSink),
            persistence: None,
        }
    }

    /// Restore the last persisted snapshot through `backend`, falling back
    /// to the documented defaults, and keep persisting through it.
    ///
    /// # Errors
    /// Returns an error if the backend cannot be read at all; an unreadable
    /// blob is treated as "no prior state" by the backend itself.
    pub fn load_or_default(backend: Box<dyn StateStore>) -> Result<Self, CoreError> {
        let state = match backend.load()? {
            Some(state) => state,
            None => AppState::initial(Utc::now()),
        };
        Ok(Self::new(state).with_persistence(backend))
    }

    pub fn with_clock(mut self, clock: Box<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_sink(mut self, sink: Box<dyn NotificationSink>) -> Self {
        self.sink = sink;
        self
    }

    pub fn with_persistence(mut self, backend: Box<dyn StateStore>) -> Self {
        self.persistence = Some(backend);
        self
    }

    /// The current published snapshot.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Apply one operation and everything it entails.
    ///
    /// Returns the snapshot current after all reactions have settled.
    ///
    /// # Errors
    /// Returns `Dispatch` for an invalid payload; the state is untouched.
    pub fn dispatch(&mut self, action: Action) -> Result<AppState, CoreError> {
        let before = self.state.clone();
        let after = reduce(&before, &action)?;
        self.state = after.clone();
        self.persist();

        // Rules observe the (before, after) pair of THIS transition even
        // when earlier rules have already advanced the store further.
        let rules = self.reactions.clone();
        for rule in &rules {
            (rule.run)(&action, &before, &after, self);
        }
        Ok(self.state.clone())
    }

    /// Dispatch issued from inside a reaction. Follow-ups are built from
    /// state the rule just observed, so a rejection here is a rule bug;
    /// it is logged and the rest of the chain continues.
    pub(crate) fn follow_up(&mut self, rule: &'static str, action: Action) {
        if let Err(e) = self.dispatch(action) {
            log::warn!("reaction '{rule}' follow-up rejected: {e}");
        }
    }

    /// Fire the notification sink; failures are logged, never raised.
    pub(crate) fn play_completion_sound(&self) {
        if let Err(e) = self.sink.play_completion_sound() {
            log::warn!("completion sound failed: {e}");
        }
    }

    fn persist(&self) {
        if let Some(backend) = &self.persistence {
            if let Err(e) = backend.save(&self.state) {
                log::warn!("state persistence failed: {e}");
            }
        }
    }
}

/// The pure transition function: combined state + operation -> new state.
///
/// Never mutates `state`; unknown task ids on update/delete are accepted
/// as no-ops, matching list semantics.
fn reduce(state: &AppState, action: &Action) -> Result<AppState, DispatchError> {
    let mut next = state.clone();
    match action {
        Action::Tick => {
            if next.timer.is_active {
                next.timer.time_left = next.timer.time_left.saturating_sub(1);
            }
        }
        Action::UpdateTimer(patch) => {
            next.timer = next.timer.apply(patch);
        }
        Action::ResetTimer => {
            next.timer.mode = TimerMode::Work;
            next.timer.time_left = TimerMode::Work.duration_secs(&next.settings);
            next.timer.is_active = false;
        }
        Action::ToggleTimer => {
            next.timer.is_active = !next.timer.is_active;
        }
        Action::SelectMode(mode) => {
            next.timer.mode = *mode;
            next.timer.time_left = mode.duration_secs(&next.settings);
            next.timer.is_active = false;
        }
        Action::SetCurrentTask(id) => {
            next.timer.current_task = id.clone();
        }
        Action::UpdateSettings(patch) => {
            patch.validate()?;
            next.settings = next.settings.apply(patch);
        }
        Action::AddTask { title, pomodoros } => {
            next.tasks.push(Task::new(title, *pomodoros)?);
        }
        Action::UpdateTask { id, patch } => {
            patch.validate()?;
            if let Some(task) = next.tasks.iter_mut().find(|t| t.id == *id) {
                *task = task.apply(patch);
            }
        }
        Action::DeleteTask(id) => {
            next.tasks.retain(|t| t.id != *id);
        }
        Action::UpdateStats(patch) => {
            next.stats = next.stats.apply(patch);
        }
    }
    Ok(next)
}
