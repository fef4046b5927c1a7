//! Timer and statistics rules: calendar-day rollover, completion credit,
//! settings sync, and streak extension.

use crate::action::Action;
use crate::state::{AppState, StatsPatch, TaskPatch, TimerMode, TimerPatch};
use crate::store::Store;

/// Resets the daily counter when the calendar date moves past
/// `stats.last_update`, decrementing the streak if the ended day finished
/// without a single pomodoro.
///
/// The follow-up always refreshes `last_update`, which is what stops this
/// rule from re-firing on its own dispatch.
pub(super) fn day_rollover(_action: &Action, _before: &AppState, after: &AppState, store: &mut Store) {
    let now = store.now();
    if after.stats.last_update.date_naive() == now.date_naive() {
        return;
    }
    let stats = &after.stats;
    let ended_day_empty = stats.daily_pomodoros == 0;
    store.follow_up(
        "day_rollover",
        Action::UpdateStats(StatsPatch {
            daily_pomodoros: Some(0),
            current_streak: ended_day_empty.then(|| stats.current_streak.saturating_sub(1)),
            last_update: Some(now),
            ..Default::default()
        }),
    );
}

/// Handles the completion edge: a timer update taking `time_left` from
/// positive to zero.
///
/// A finished work phase credits the stats counters, then the attached
/// task's progress. Every finished phase then seats the next one -- mode,
/// fresh countdown, and active flag per the auto-start settings -- and
/// rings the sink if sound is enabled. A dangling `current_task` id skips
/// the task credit silently.
pub(super) fn timer_completion(action: &Action, before: &AppState, after: &AppState, store: &mut Store) {
    if !action.is_timer_update() {
        return;
    }
    if !(before.timer.time_left > 0 && after.timer.time_left == 0) {
        return;
    }

    let finished = before.timer.mode;
    if finished == TimerMode::Work {
        let stats = &store.state().stats;
        let focus_credit = store.state().settings.work_duration;
        store.follow_up(
            "timer_completion",
            Action::UpdateStats(StatsPatch {
                daily_pomodoros: Some(stats.daily_pomodoros + 1),
                weekly_pomodoros: Some(stats.weekly_pomodoros + 1),
                total_focus_time: Some(stats.total_focus_time + focus_credit),
                ..Default::default()
            }),
        );

        if let Some(task_id) = before.timer.current_task.clone() {
            let progressed = store
                .state()
                .task(&task_id)
                .map(|t| t.completed_pomodoros + 1);
            if let Some(completed_pomodoros) = progressed {
                store.follow_up(
                    "timer_completion",
                    Action::UpdateTask {
                        id: task_id,
                        patch: TaskPatch {
                            completed_pomodoros: Some(completed_pomodoros),
                            ..Default::default()
                        },
                    },
                );
            }
        }
    }

    let next_mode = finished.next();
    let settings = &store.state().settings;
    let auto_start = match next_mode {
        TimerMode::Work => settings.auto_start_pomodoros,
        TimerMode::ShortBreak | TimerMode::LongBreak => settings.auto_start_breaks,
    };
    let time_left = next_mode.duration_secs(settings);
    store.follow_up(
        "timer_completion",
        Action::UpdateTimer(TimerPatch {
            mode: Some(next_mode),
            time_left: Some(time_left),
            is_active: Some(auto_start),
            ..Default::default()
        }),
    );

    if store.state().settings.sound_enabled {
        store.play_completion_sound();
    }
}

/// Keeps a paused timer's countdown in sync with changed durations: after
/// a settings update with the timer inactive, the countdown is recomputed
/// from the current mode. Never fires while the timer is running.
pub(super) fn settings_sync(action: &Action, _before: &AppState, _after: &AppState, store: &mut Store) {
    if !matches!(action, Action::UpdateSettings(_)) {
        return;
    }
    let timer = &store.state().timer;
    if timer.is_active {
        return;
    }
    let time_left = timer.mode.duration_secs(&store.state().settings);
    store.follow_up(
        "settings_sync",
        Action::UpdateTimer(TimerPatch {
            time_left: Some(time_left),
            ..Default::default()
        }),
    );
}

/// Extends the streak on the first pomodoro of the day.
///
/// The `daily_pomodoros` 0 -> 1 transition happens exactly once per
/// calendar day because only the rollover rule resets the counter, so it
/// serves as the once-per-day test.
pub(super) fn streak_extend(action: &Action, before: &AppState, after: &AppState, store: &mut Store) {
    if !matches!(action, Action::UpdateStats(_)) {
        return;
    }
    if !(before.stats.daily_pomodoros == 0 && after.stats.daily_pomodoros == 1) {
        return;
    }
    let current_streak = store.state().stats.current_streak;
    store.follow_up(
        "streak_extend",
        Action::UpdateStats(StatsPatch {
            current_streak: Some(current_streak + 1),
            last_update: Some(store.now()),
            ..Default::default()
        }),
    );
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};

    use crate::action::Action;
    use crate::clock::{Clock, ManualClock};
    use crate::state::{AppState, SettingsPatch, StatsPatch, TimerPatch};
    use crate::store::Store;

    fn store_with_clock() -> (Store, ManualClock) {
        let start = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();
        let clock = ManualClock::new(start);
        let store =
            Store::new(AppState::initial(start)).with_clock(Box::new(clock.clone()));
        (store, clock)
    }

    #[test]
    fn settings_sync_recomputes_paused_countdown() {
        let (mut store, _clock) = store_with_clock();
        store
            .dispatch(Action::UpdateSettings(SettingsPatch {
                work_duration: Some(50),
                ..Default::default()
            }))
            .unwrap();
        assert_eq!(store.state().timer.time_left, 50 * 60);
    }

    #[test]
    fn settings_sync_never_touches_an_active_timer() {
        let (mut store, _clock) = store_with_clock();
        store.dispatch(Action::ToggleTimer).unwrap();
        store
            .dispatch(Action::UpdateSettings(SettingsPatch {
                work_duration: Some(50),
                ..Default::default()
            }))
            .unwrap();
        assert_eq!(store.state().timer.time_left, 1500);
    }

    #[test]
    fn rollover_decrements_streak_after_an_empty_day() {
        let (mut store, clock) = store_with_clock();
        store
            .dispatch(Action::UpdateStats(StatsPatch {
                current_streak: Some(3),
                ..Default::default()
            }))
            .unwrap();
        clock.advance(Duration::days(1));
        store.dispatch(Action::ToggleTimer).unwrap();
        let stats = &store.state().stats;
        assert_eq!(stats.daily_pomodoros, 0);
        assert_eq!(stats.current_streak, 2);
        assert_eq!(stats.last_update.date_naive(), clock.now().date_naive());
    }

    #[test]
    fn rollover_keeps_streak_after_a_productive_day() {
        let (mut store, clock) = store_with_clock();
        store
            .dispatch(Action::UpdateStats(StatsPatch {
                daily_pomodoros: Some(2),
                current_streak: Some(3),
                ..Default::default()
            }))
            .unwrap();
        clock.advance(Duration::days(1));
        store.dispatch(Action::ToggleTimer).unwrap();
        let stats = &store.state().stats;
        assert_eq!(stats.daily_pomodoros, 0);
        assert_eq!(stats.current_streak, 3);
    }

    #[test]
    fn rollover_fires_once_per_day_boundary() {
        let (mut store, clock) = store_with_clock();
        store
            .dispatch(Action::UpdateStats(StatsPatch {
                current_streak: Some(3),
                ..Default::default()
            }))
            .unwrap();
        clock.advance(Duration::days(1));
        store.dispatch(Action::ToggleTimer).unwrap();
        store.dispatch(Action::ToggleTimer).unwrap();
        store.dispatch(Action::Tick).unwrap();
        assert_eq!(store.state().stats.current_streak, 2);
    }

    #[test]
    fn first_pomodoro_of_the_day_extends_the_streak() {
        let (mut store, _clock) = store_with_clock();
        store
            .dispatch(Action::UpdateTimer(TimerPatch {
                time_left: Some(1),
                is_active: Some(true),
                ..Default::default()
            }))
            .unwrap();
        store.dispatch(Action::Tick).unwrap();
        let stats = &store.state().stats;
        assert_eq!(stats.daily_pomodoros, 1);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn second_pomodoro_does_not_extend_again() {
        let (mut store, _clock) = store_with_clock();
        for _ in 0..2 {
            store
                .dispatch(Action::UpdateTimer(TimerPatch {
                    mode: Some(crate::state::TimerMode::Work),
                    time_left: Some(1),
                    is_active: Some(true),
                    ..Default::default()
                }))
                .unwrap();
            store.dispatch(Action::Tick).unwrap();
        }
        let stats = &store.state().stats;
        assert_eq!(stats.daily_pomodoros, 2);
        assert_eq!(stats.current_streak, 1);
    }

    #[test]
    fn break_completion_credits_no_stats() {
        let (mut store, _clock) = store_with_clock();
        store
            .dispatch(Action::SelectMode(crate::state::TimerMode::ShortBreak))
            .unwrap();
        store
            .dispatch(Action::UpdateTimer(TimerPatch {
                time_left: Some(1),
                is_active: Some(true),
                ..Default::default()
            }))
            .unwrap();
        store.dispatch(Action::Tick).unwrap();
        let state = store.state();
        assert_eq!(state.stats.daily_pomodoros, 0);
        assert_eq!(state.stats.total_focus_time, 0);
        assert_eq!(state.timer.mode, crate::state::TimerMode::Work);
        // auto_start_pomodoros defaults to false
        assert!(!state.timer.is_active);
    }
}
