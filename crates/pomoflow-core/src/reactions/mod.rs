//! Reaction engine: rules run after every accepted transition.
//!
//! Each rule sees the operation plus the before/after snapshots of the
//! transition that triggered it, and may issue follow-up operations through
//! the store's re-entrant dispatch. Follow-ups complete depth-first before
//! the next rule of the outer transition runs.
//!
//! List order is load-bearing:
//! - rollover runs first so a completion on a fresh day credits the new
//!   day's counters, not the stale ones;
//! - the completion rule updates stats before task progress, which task
//!   rules in turn depend on for reassignment chaining.

mod tasks;
mod timer_stats;

use crate::action::Action;
use crate::state::AppState;
use crate::store::Store;

type RuleFn = fn(&Action, &AppState, &AppState, &mut Store);

/// A named rule: trigger predicate and effect live in `run`.
#[derive(Clone, Copy)]
pub struct Reaction {
    pub name: &'static str,
    pub(crate) run: RuleFn,
}

/// The rules of §timer/stats and §tasks, in evaluation order.
pub(crate) fn builtin_reactions() -> Vec<Reaction> {
    vec![
        Reaction {
            name: "day_rollover",
            run: timer_stats::day_rollover,
        },
        Reaction {
            name: "timer_completion",
            run: timer_stats::timer_completion,
        },
        Reaction {
            name: "settings_sync",
            run: timer_stats::settings_sync,
        },
        Reaction {
            name: "streak_extend",
            run: timer_stats::streak_extend,
        },
        Reaction {
            name: "task_completed_reassign",
            run: tasks::completed_reassign,
        },
        Reaction {
            name: "task_deleted_reassign",
            run: tasks::deleted_reassign,
        },
    ]
}
