use crate::io::storage::{KeyValueStore, StoreError};
use crate::model::task::Task;
use crate::model::theme_mode::ThemeMode;
use crate::ops::task_ops::TaskList;

/// Key holding the serialized task list
pub const TASKS_KEY: &str = "todos.json";
/// Key holding the theme preference
pub const THEME_KEY: &str = "theme";

/// Load the task list. Missing or malformed data yields an empty list.
pub fn load_tasks(store: &dyn KeyValueStore) -> TaskList {
    let Some(raw) = store.load(TASKS_KEY) else {
        tracing::info!("no stored tasks, starting empty");
        return TaskList::new();
    };

    let stored: Vec<Task> = match serde_json::from_str(&raw) {
        Ok(tasks) => tasks,
        Err(e) => {
            tracing::warn!(error = %e, "stored tasks are malformed, starting empty");
            return TaskList::new();
        }
    };

    let (list, repairs) = TaskList::from_tasks(stored);
    if repairs.dropped_blank > 0 {
        tracing::warn!(count = repairs.dropped_blank, "dropped stored tasks with blank text");
    }
    for (old, new) in &repairs.reassigned {
        tracing::warn!(old, new, "reassigned duplicate task id");
    }
    tracing::info!(count = list.len(), "loaded tasks");
    list
}

/// Snapshot the task list
pub fn save_tasks(store: &mut dyn KeyValueStore, tasks: &[Task]) -> Result<(), StoreError> {
    let json = serde_json::to_string(tasks)?;
    store.save(TASKS_KEY, &json)
}

pub fn load_theme(store: &dyn KeyValueStore) -> ThemeMode {
    ThemeMode::from_stored(store.load(THEME_KEY).as_deref())
}

pub fn save_theme(store: &mut dyn KeyValueStore, mode: ThemeMode) -> Result<(), StoreError> {
    store.save(THEME_KEY, mode.as_str())
}
