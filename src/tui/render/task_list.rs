use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::views::ViewKind;
use crate::tui::app::{App, Mode};

use super::task_line;

/// Render the active list, scrolled so the cursor row stays visible
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let height = area.height as usize;
    let width = area.width as usize;
    app.scroll_to_cursor(height);

    let tasks = app.view(ViewKind::Active);
    if tasks.is_empty() {
        let empty = Paragraph::new(Line::from(Span::styled(
            format!(" {}. Press n to add a task.", ViewKind::Active.empty_text()),
            Style::default().fg(app.theme.dim).bg(bg),
        )))
        .style(Style::default().bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    // The cursor row is only highlighted while the list has focus
    let show_cursor = app.mode == Mode::Navigate && app.overlay.is_none();
    let lines: Vec<Line> = tasks
        .iter()
        .enumerate()
        .skip(app.scroll)
        .take(height)
        .map(|(i, task)| task_line(&app.theme, task, show_cursor && i == app.cursor, width))
        .collect();

    frame.render_widget(
        Paragraph::new(lines).style(Style::default().bg(bg)),
        area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::task_ops::Action;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn empty_list_shows_hint() {
        let mut app = app_with(&[]);
        let output = render_to_string(50, 3, |frame, area| render_task_list(frame, &mut app, area));
        assert_eq!(output, " Nothing to do. Press n to add a task.");
    }

    #[test]
    fn lists_only_active_tasks() {
        let mut app = app_with(&["Buy milk", "Walk dog", "Pay rent"]);
        let walk = app.tasks()[1].id;
        let rent = app.tasks()[2].id;
        app.dispatch(Action::ToggleCompleted(walk));
        app.dispatch(Action::ToggleImportant(rent));
        app.dispatch(Action::ToggleArchived(rent));

        let output = render_to_string(40, 5, |frame, area| render_task_list(frame, &mut app, area));
        assert_eq!(output, " [ ] \u{2606} Buy milk");
    }

    #[test]
    fn scrolls_to_keep_cursor_visible() {
        let mut app = app_with(&["a", "b", "c", "d"]);
        app.cursor = 3;
        let output = render_to_string(20, 2, |frame, area| render_task_list(frame, &mut app, area));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec![" [ ] \u{2606} c", " [ ] \u{2606} d"]);
        assert_eq!(app.scroll, 2);
    }
}
