use serde::{Deserialize, Serialize};

/// Identifier assigned to a task when it is created. Never reused.
pub type TaskId = u64;

/// A single to-do entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Display text, stored trimmed and never empty
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub important: bool,
    #[serde(default)]
    pub archived: bool,
}

impl Task {
    /// Create a new task with all flags cleared
    pub fn new(id: TaskId, text: impl Into<String>) -> Self {
        Task {
            id,
            text: text.into(),
            completed: false,
            important: false,
            archived: false,
        }
    }

    /// Neither completed nor archived
    pub fn is_active(&self) -> bool {
        !self.completed && !self.archived
    }

    /// Completed but still on the main board
    pub fn is_done_unarchived(&self) -> bool {
        self.completed && !self.archived
    }

    /// The character shown inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.completed { 'x' } else { ' ' }
    }
}

/// Normalize user-entered task text. Returns None when nothing is left after trimming.
pub fn normalize_text(text: &str) -> Option<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_task_has_no_flags() {
        let task = Task::new(7, "Buy milk");
        assert_eq!(task.id, 7);
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed && !task.important && !task.archived);
        assert!(task.is_active());
    }

    #[test]
    fn serde_uses_plain_field_names() {
        let task = Task::new(1, "Water plants");
        let json = serde_json::to_string(&task).unwrap();
        assert_eq!(
            json,
            r#"{"id":1,"text":"Water plants","completed":false,"important":false,"archived":false}"#
        );
    }

    #[test]
    fn missing_flags_default_to_false() {
        let task: Task = serde_json::from_str(r#"{"id":3,"text":"Call mom"}"#).unwrap();
        assert_eq!(task, Task::new(3, "Call mom"));
    }

    #[test]
    fn normalize_text_trims_and_rejects_blank() {
        assert_eq!(normalize_text("  hello  "), Some("hello".to_string()));
        assert_eq!(normalize_text(""), None);
        assert_eq!(normalize_text(" \t\n "), None);
    }

    #[test]
    fn archived_completed_task_is_neither_active_nor_done() {
        let mut task = Task::new(1, "x");
        task.completed = true;
        task.archived = true;
        assert!(!task.is_active());
        assert!(!task.is_done_unarchived());
        assert_eq!(task.checkbox_char(), 'x');
    }
}
