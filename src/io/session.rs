use crate::io::storage::{KeyValueStore, StoreError};
use crate::io::tasks_io::{load_tasks, load_theme, save_tasks, save_theme};
use crate::model::theme_mode::ThemeMode;
use crate::ops::task_ops::{Action, Notice, TaskList};

/// A change that was applied in memory but whose snapshot could not be saved
#[derive(Debug, thiserror::Error)]
#[error("{source}")]
pub struct SaveFailed {
    /// Outcome of the applied action
    pub notice: Notice,
    pub source: StoreError,
}

/// A task list bound to the store it was loaded from.
///
/// Every action that changes the list is followed by a snapshot save;
/// no-op actions write nothing.
pub struct Session<S: KeyValueStore> {
    list: TaskList,
    theme: ThemeMode,
    store: S,
}

impl<S: KeyValueStore> Session<S> {
    /// Load tasks and theme preference from `store`
    pub fn load(store: S) -> Self {
        let list = load_tasks(&store);
        let theme = load_theme(&store);
        Session { list, theme, store }
    }

    pub fn list(&self) -> &TaskList {
        &self.list
    }

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Apply an action and persist the result if anything changed.
    ///
    /// The in-memory list is updated even when the save fails; the error
    /// then carries the action's notice.
    pub fn dispatch(&mut self, action: Action) -> Result<Option<Notice>, SaveFailed> {
        let name = action.name();
        let Some(notice) = self.list.apply(action) else {
            tracing::debug!(action = name, "no-op");
            return Ok(None);
        };
        tracing::debug!(action = name, task = notice.task_id, "applied");
        match save_tasks(&mut self.store, self.list.tasks()) {
            Ok(()) => Ok(Some(notice)),
            Err(source) => Err(SaveFailed { notice, source }),
        }
    }

    /// Set and persist the theme preference
    pub fn set_theme(&mut self, mode: ThemeMode) -> Result<(), StoreError> {
        self.theme = mode;
        save_theme(&mut self.store, mode)
    }

    pub fn toggle_theme(&mut self) -> Result<ThemeMode, StoreError> {
        let mode = self.theme.toggled();
        self.set_theme(mode)?;
        Ok(mode)
    }
}
