//! Task rules: keep `timer.current_task` pointing at live, unfinished work.

use crate::action::Action;
use crate::state::AppState;
use crate::store::Store;

/// When the attached task transitions to completed, hand the timer the
/// first incomplete task in insertion order, or clear it.
///
/// Fires on the transition rather than the literal payload flag so that
/// completions derived from the pomodoro counters chain the same way as
/// explicit ones.
pub(super) fn completed_reassign(action: &Action, before: &AppState, after: &AppState, store: &mut Store) {
    let Action::UpdateTask { id, .. } = action else {
        return;
    };
    if after.timer.current_task.as_deref() != Some(id.as_str()) {
        return;
    }
    let was_done = before.task(id).is_some_and(|t| t.completed);
    let now_done = after.task(id).is_some_and(|t| t.completed);
    if was_done || !now_done {
        return;
    }
    let next = store
        .state()
        .first_incomplete_task()
        .map(|t| t.id.clone());
    store.follow_up("task_completed_reassign", Action::SetCurrentTask(next));
}

/// When the attached task is deleted, same selection over what remains.
pub(super) fn deleted_reassign(action: &Action, before: &AppState, after: &AppState, store: &mut Store) {
    let Action::DeleteTask(id) = action else {
        return;
    };
    if before.timer.current_task.as_deref() != Some(id.as_str()) {
        return;
    }
    let next = after.first_incomplete_task().map(|t| t.id.clone());
    store.follow_up("task_deleted_reassign", Action::SetCurrentTask(next));
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::action::Action;
    use crate::state::{AppState, TaskPatch};
    use crate::store::Store;

    fn store_with_tasks(titles: &[&str]) -> (Store, Vec<String>) {
        let mut store = Store::new(AppState::initial(Utc::now()));
        let mut ids = Vec::new();
        for title in titles {
            store
                .dispatch(Action::AddTask {
                    title: (*title).into(),
                    pomodoros: 1,
                })
                .unwrap();
            ids.push(store.state().tasks.last().unwrap().id.clone());
        }
        (store, ids)
    }

    #[test]
    fn completing_the_current_task_moves_to_the_next_incomplete() {
        let (mut store, ids) = store_with_tasks(&["a", "b", "c"]);
        store
            .dispatch(Action::SetCurrentTask(Some(ids[0].clone())))
            .unwrap();
        store
            .dispatch(Action::UpdateTask {
                id: ids[0].clone(),
                patch: TaskPatch {
                    completed: Some(true),
                    ..Default::default()
                },
            })
            .unwrap();
        assert_eq!(store.state().timer.current_task, Some(ids[1].clone()));
    }

    #[test]
    fn completing_the_last_task_clears_the_reference() {
        let (mut store, ids) = store_with_tasks(&["only"]);
        store
            .dispatch(Action::SetCurrentTask(Some(ids[0].clone())))
            .unwrap();
        store
            .dispatch(Action::UpdateTask {
                id: ids[0].clone(),
                patch: TaskPatch {
                    completed: Some(true),
                    ..Default::default()
                },
            })
            .unwrap();
        assert_eq!(store.state().timer.current_task, None);
    }

    #[test]
    fn completing_a_non_current_task_leaves_the_reference_alone() {
        let (mut store, ids) = store_with_tasks(&["a", "b"]);
        store
            .dispatch(Action::SetCurrentTask(Some(ids[0].clone())))
            .unwrap();
        store
            .dispatch(Action::UpdateTask {
                id: ids[1].clone(),
                patch: TaskPatch {
                    completed: Some(true),
                    ..Default::default()
                },
            })
            .unwrap();
        assert_eq!(store.state().timer.current_task, Some(ids[0].clone()));
    }

    #[test]
    fn deleting_the_current_task_reassigns_in_insertion_order() {
        let (mut store, ids) = store_with_tasks(&["a", "b", "c"]);
        store
            .dispatch(Action::SetCurrentTask(Some(ids[1].clone())))
            .unwrap();
        store.dispatch(Action::DeleteTask(ids[1].clone())).unwrap();
        assert_eq!(store.state().timer.current_task, Some(ids[0].clone()));
    }

    #[test]
    fn deleting_the_only_task_clears_the_reference() {
        let (mut store, ids) = store_with_tasks(&["only"]);
        store
            .dispatch(Action::SetCurrentTask(Some(ids[0].clone())))
            .unwrap();
        store.dispatch(Action::DeleteTask(ids[0].clone())).unwrap();
        assert_eq!(store.state().timer.current_task, None);
    }

    #[test]
    fn title_edits_to_the_current_task_do_not_reassign() {
        let (mut store, ids) = store_with_tasks(&["a", "b"]);
        store
            .dispatch(Action::SetCurrentTask(Some(ids[0].clone())))
            .unwrap();
        store
            .dispatch(Action::UpdateTask {
                id: ids[0].clone(),
                patch: TaskPatch {
                    title: Some("renamed".into()),
                    ..Default::default()
                },
            })
            .unwrap();
        assert_eq!(store.state().timer.current_task, Some(ids[0].clone()));
    }
}
