use serde::Serialize;

use crate::model::{Task, TaskId, ThemeMode};
use crate::ops::task_ops::Notice;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson<'a> {
    pub id: TaskId,
    pub text: &'a str,
    pub completed: bool,
    pub important: bool,
    pub archived: bool,
}

#[derive(Serialize)]
pub struct NoticeJson<'a> {
    pub id: TaskId,
    pub message: &'a str,
}

#[derive(Serialize)]
pub struct ThemeJson {
    pub theme: &'static str,
}

// ---------------------------------------------------------------------------
// Conversions
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson<'_> {
    TaskJson {
        id: task.id,
        text: &task.text,
        completed: task.completed,
        important: task.important,
        archived: task.archived,
    }
}

pub fn notice_to_json(notice: &Notice) -> NoticeJson<'_> {
    NoticeJson {
        id: notice.task_id,
        message: &notice.message,
    }
}

pub fn theme_to_json(mode: ThemeMode) -> ThemeJson {
    ThemeJson {
        theme: mode.as_str(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Format a task as a single line: `<id>  [x] * <text>`.
/// The star column is blank for unimportant tasks; archived tasks get a
/// trailing marker.
pub fn format_task_line(task: &Task) -> String {
    let star = if task.important { '*' } else { ' ' };
    let archived = if task.archived { "  (archived)" } else { "" };
    format!(
        "{}  [{}] {} {}{}",
        task.id,
        task.checkbox_char(),
        star,
        task.text,
        archived
    )
}

/// Format the result of a change: the notice, then the id it touched
pub fn format_notice(notice: &Notice) -> String {
    format!("{} ({})", notice.message, notice.task_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn plain_task_line() {
        let task = Task::new(1700000000000, "Buy milk");
        assert_eq!(format_task_line(&task), "1700000000000  [ ]   Buy milk");
    }

    #[test]
    fn flagged_task_line() {
        let mut task = Task::new(7, "Pay rent");
        task.completed = true;
        task.important = true;
        task.archived = true;
        assert_eq!(format_task_line(&task), "7  [x] * Pay rent  (archived)");
    }

    #[test]
    fn task_json_fields() {
        let mut task = Task::new(3, "Walk dog");
        task.important = true;
        let json = serde_json::to_string(&task_to_json(&task)).unwrap();
        assert_eq!(
            json,
            r#"{"id":3,"text":"Walk dog","completed":false,"important":true,"archived":false}"#
        );
    }

    #[test]
    fn notice_line() {
        let notice = Notice::new(9, "Task deleted");
        assert_eq!(format_notice(&notice), "Task deleted (9)");
    }
}
