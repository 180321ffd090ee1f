use std::collections::HashSet;
use std::fmt;

use chrono::Utc;

use crate::model::task::{Task, TaskId, normalize_text};

// ---------------------------------------------------------------------------
// Actions and notices
// ---------------------------------------------------------------------------

/// A mutation request against the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Edit { id: TaskId, text: String },
    ToggleCompleted(TaskId),
    ToggleImportant(TaskId),
    ToggleArchived(TaskId),
    Remove(TaskId),
}

impl Action {
    /// Short name used in log events
    pub fn name(&self) -> &'static str {
        match self {
            Action::Add(_) => "add",
            Action::Edit { .. } => "edit",
            Action::ToggleCompleted(_) => "toggle_completed",
            Action::ToggleImportant(_) => "toggle_important",
            Action::ToggleArchived(_) => "toggle_archived",
            Action::Remove(_) => "remove",
        }
    }
}

/// Human-readable outcome of a successful mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    /// The task the action applied to (for `Remove`, the task that is gone)
    pub task_id: TaskId,
    pub message: String,
}

impl Notice {
    pub fn new(task_id: TaskId, message: impl Into<String>) -> Self {
        Notice {
            task_id,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

// ---------------------------------------------------------------------------
// Id generation
// ---------------------------------------------------------------------------

/// Issues task ids from the wall clock (milliseconds), bumped past the last
/// issued id so two creations in the same millisecond never collide.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    last: TaskId,
}

impl IdGenerator {
    /// A generator whose next id is strictly greater than `last`
    pub fn starting_after(last: TaskId) -> Self {
        IdGenerator { last }
    }

    pub fn next_id(&mut self) -> TaskId {
        self.next_at(now_millis())
    }

    /// Next id given the current clock reading
    pub fn next_at(&mut self, now_ms: TaskId) -> TaskId {
        let id = now_ms.max(self.last.saturating_add(1));
        self.last = id;
        id
    }
}

fn now_millis() -> TaskId {
    Utc::now().timestamp_millis().max(0) as TaskId
}

// ---------------------------------------------------------------------------
// Task list
// ---------------------------------------------------------------------------

/// What `TaskList::from_tasks` had to fix in loaded data
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadRepairs {
    /// Entries dropped because their text was blank
    pub dropped_blank: usize,
    /// Duplicate ids that were reassigned, as (old, new)
    pub reassigned: Vec<(TaskId, TaskId)>,
}

impl LoadRepairs {
    pub fn is_empty(&self) -> bool {
        self.dropped_blank == 0 && self.reassigned.is_empty()
    }
}

/// The canonical, ordered collection of tasks and every mutation on it
#[derive(Debug, Clone, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    ids: IdGenerator,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from previously stored tasks, restoring the invariants:
    /// text is non-empty and trimmed, and ids are unique.
    pub fn from_tasks(stored: Vec<Task>) -> (Self, LoadRepairs) {
        let mut repairs = LoadRepairs::default();
        let max_id = stored.iter().map(|t| t.id).max().unwrap_or(0);
        let mut ids = IdGenerator::starting_after(max_id);
        let mut seen = HashSet::new();
        let mut tasks = Vec::with_capacity(stored.len());

        for mut task in stored {
            let Some(text) = normalize_text(&task.text) else {
                repairs.dropped_blank += 1;
                continue;
            };
            task.text = text;
            if !seen.insert(task.id) {
                let fresh = ids.next_at(0);
                repairs.reassigned.push((task.id, fresh));
                task.id = fresh;
                seen.insert(fresh);
            }
            tasks.push(task);
        }

        (TaskList { tasks, ids }, repairs)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Apply an action. Returns None when nothing changed.
    pub fn apply(&mut self, action: Action) -> Option<Notice> {
        match action {
            Action::Add(text) => self.add(&text),
            Action::Edit { id, text } => self.edit(id, &text),
            Action::ToggleCompleted(id) => self.toggle_completed(id),
            Action::ToggleImportant(id) => self.toggle_important(id),
            Action::ToggleArchived(id) => self.toggle_archived(id),
            Action::Remove(id) => self.remove(id),
        }
    }

    /// Append a new task. Blank text is ignored.
    pub fn add(&mut self, text: &str) -> Option<Notice> {
        let text = normalize_text(text)?;
        let id = self.ids.next_id();
        self.tasks.push(Task::new(id, text));
        Some(Notice::new(id, "Task added"))
    }

    /// Replace a task's text, keeping its flags. Blank text is ignored.
    pub fn edit(&mut self, id: TaskId, text: &str) -> Option<Notice> {
        let text = normalize_text(text)?;
        let task = self.find_mut(id)?;
        task.text = text;
        Some(Notice::new(id, "Task updated"))
    }

    pub fn toggle_completed(&mut self, id: TaskId) -> Option<Notice> {
        let task = self.find_mut(id)?;
        task.completed = !task.completed;
        let message = if task.completed {
            "Task marked as completed"
        } else {
            "Task marked as incomplete"
        };
        Some(Notice::new(id, message))
    }

    pub fn toggle_important(&mut self, id: TaskId) -> Option<Notice> {
        let task = self.find_mut(id)?;
        task.important = !task.important;
        let message = if task.important {
            format!("\"{}\" marked as important", task.text)
        } else {
            format!("\"{}\" unmarked as important", task.text)
        };
        Some(Notice::new(id, message))
    }

    pub fn toggle_archived(&mut self, id: TaskId) -> Option<Notice> {
        let task = self.find_mut(id)?;
        task.archived = !task.archived;
        let message = if task.archived {
            "Task archived"
        } else {
            "Task unarchived"
        };
        Some(Notice::new(id, message))
    }

    /// Delete a task permanently
    pub fn remove(&mut self, id: TaskId) -> Option<Notice> {
        let pos = self.tasks.iter().position(|t| t.id == id)?;
        self.tasks.remove(pos);
        Some(Notice::new(id, "Task deleted"))
    }

    fn find_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }
}
