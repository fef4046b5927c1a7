//! Snapshot persistence through the SQLite adapter on disk.

use chrono::{TimeZone, Utc};
use pomoflow_core::{
    Action, AppState, ManualClock, SettingsPatch, SqliteStateStore, StateStore, Store,
};

#[test]
fn a_session_survives_process_restart() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("pomoflow.db");
    let start = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();

    let backend = SqliteStateStore::with_path(&db_path).unwrap();
    let mut store = Store::new(AppState::initial(start))
        .with_clock(Box::new(ManualClock::new(start)))
        .with_persistence(Box::new(backend));

    store
        .dispatch(Action::AddTask {
            title: "Carry me over".into(),
            pomodoros: 4,
        })
        .unwrap();
    store
        .dispatch(Action::UpdateSettings(SettingsPatch {
            work_duration: Some(50),
            ..Default::default()
        }))
        .unwrap();
    store.dispatch(Action::ToggleTimer).unwrap();
    let final_state = store.state().clone();
    drop(store);

    let reopened = SqliteStateStore::with_path(&db_path).unwrap();
    let restored = reopened.load().unwrap().expect("no snapshot on disk");
    assert_eq!(restored, final_state);
}

#[test]
fn load_or_default_resumes_from_the_stored_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("pomoflow.db");
    let start = Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap();

    let backend = SqliteStateStore::with_path(&db_path).unwrap();
    let mut store = Store::new(AppState::initial(start)).with_persistence(Box::new(backend));
    store
        .dispatch(Action::AddTask {
            title: "persisted".into(),
            pomodoros: 1,
        })
        .unwrap();
    let expected = store.state().clone();
    drop(store);

    let resumed =
        Store::load_or_default(Box::new(SqliteStateStore::with_path(&db_path).unwrap())).unwrap();
    assert_eq!(resumed.state(), &expected);
}

#[test]
fn load_or_default_falls_back_to_documented_defaults() {
    let backend = SqliteStateStore::open_memory().unwrap();
    let store = Store::load_or_default(Box::new(backend)).unwrap();
    let state = store.state();
    assert_eq!(state.timer.time_left, 1500);
    assert!(!state.timer.is_active);
    assert!(state.tasks.is_empty());
    assert_eq!(state.settings.work_duration, 25);
}
