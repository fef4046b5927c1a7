//! # Pomoflow Core Library
//!
//! State/event coordination for the Pomoflow Pomodoro timer: a reactive
//! state store whose rules keep timer state, task state, and statistics
//! mutually consistent as time elapses and tasks change.
//!
//! ## Architecture
//!
//! - **Dispatch core**: a single synchronous transition function; every
//!   operation produces a new combined snapshot
//! - **Reaction engine**: an ordered rule list observing each transition
//!   and issuing follow-up operations depth-first
//! - **Persistence**: the whole snapshot as one SQLite key-value blob,
//!   written after every accepted dispatch
//! - **Collaborators**: the host supplies the 1-second tick cadence and a
//!   fire-and-forget notification sink
//!
//! ## Key Components
//!
//! - [`Store`]: the state owner; `dispatch` is the only way in
//! - [`Action`]: the named operations
//! - [`AppState`]: the combined snapshot
//! - [`StateStore`]: persistence adapter trait, [`SqliteStateStore`] impl

pub mod action;
pub mod clock;
pub mod error;
pub mod notify;
pub mod reactions;
pub mod state;
pub mod storage;
pub mod store;

pub use action::Action;
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{CoreError, DispatchError, StorageError};
pub use notify::{NotificationSink, NullSink};
pub use state::{
    AppState, Settings, SettingsPatch, Stats, StatsPatch, Task, TaskPatch, TimerMode, TimerPatch,
    TimerState,
};
pub use storage::{data_dir, SqliteStateStore, StateStore};
pub use store::Store;
