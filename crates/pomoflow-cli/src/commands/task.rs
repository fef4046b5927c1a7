use clap::Subcommand;
use pomoflow_core::{Action, TaskPatch};

use crate::common;

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a task
    Add {
        title: String,
        /// Target number of pomodoros
        #[arg(long, default_value_t = 1)]
        pomodoros: u32,
    },
    /// List tasks in insertion order
    List {
        #[arg(long)]
        json: bool,
    },
    /// Mark a task completed
    Done { id: String },
    /// Delete a task
    Delete { id: String },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = common::open_store()?;
    match action {
        TaskAction::Add { title, pomodoros } => {
            store.dispatch(Action::AddTask { title, pomodoros })?;
            let task = store.state().tasks.last().expect("task just added");
            println!("added {} ({})", task.title, task.id);
        }
        TaskAction::List { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(&store.state().tasks)?);
            } else {
                let current = store.state().timer.current_task.clone();
                for task in &store.state().tasks {
                    let mark = if task.completed { 'x' } else { ' ' };
                    let here = if current.as_deref() == Some(task.id.as_str()) {
                        '*'
                    } else {
                        ' '
                    };
                    println!(
                        "[{mark}]{here} {}/{}  {}  {}",
                        task.completed_pomodoros, task.pomodoros, task.id, task.title
                    );
                }
            }
        }
        TaskAction::Done { id } => {
            if store.state().task(&id).is_none() {
                return Err(format!("no task with id {id}").into());
            }
            store.dispatch(Action::UpdateTask {
                id,
                patch: TaskPatch {
                    completed: Some(true),
                    ..Default::default()
                },
            })?;
            println!("done");
        }
        TaskAction::Delete { id } => {
            if store.state().task(&id).is_none() {
                return Err(format!("no task with id {id}").into());
            }
            store.dispatch(Action::DeleteTask(id))?;
            println!("deleted");
        }
    }
    Ok(())
}
