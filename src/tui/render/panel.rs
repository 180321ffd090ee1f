use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::ops::views::ViewKind;
use crate::tui::app::App;

use super::{centered_rect, task_line};

/// Popup listing the completed or archived tasks, with the panel's keys
/// on its last row
pub fn render_panel(frame: &mut Frame, app: &App, kind: ViewKind, area: Rect) {
    let popup_area = centered_rect(80, 70, area);
    frame.render_widget(Clear, popup_area);

    let bg = app.theme.background;
    let tasks = app.view(kind);
    let accent = match kind {
        ViewKind::Archived => app.theme.archived,
        _ => app.theme.done,
    };

    let title = format!(" {} ({}) ", kind.title(), tasks.len());
    let block = Block::default()
        .title(Span::styled(
            title,
            Style::default()
                .fg(accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));
    let inner = block.inner(popup_area);
    frame.render_widget(block, popup_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let hint = match kind {
        ViewKind::Completed => " u undo  d delete  Esc close",
        _ => " u unarchive  Esc close",
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
        ))),
        chunks[1],
    );

    if tasks.is_empty() {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!(" {}", kind.empty_text()),
                Style::default().fg(app.theme.dim).bg(bg),
            ))),
            chunks[0],
        );
        return;
    }

    let height = chunks[0].height as usize;
    let width = chunks[0].width as usize;
    let cursor = app.overlay_cursor.min(tasks.len() - 1);
    let scroll = (cursor + 1).saturating_sub(height);
    let lines: Vec<Line> = tasks
        .iter()
        .enumerate()
        .skip(scroll)
        .take(height)
        .map(|(i, task)| task_line(&app.theme, task, i == cursor, width))
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[0]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::task_ops::Action;
    use crate::tui::app::Overlay;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn completed_panel_lists_done_tasks() {
        let mut app = app_with(&["Buy milk", "Walk dog"]);
        let id = app.tasks()[0].id;
        app.dispatch(Action::ToggleCompleted(id));
        app.toggle_overlay(Overlay::Completed);

        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_panel(frame, &app, ViewKind::Completed, area)
        });
        assert!(output.contains("Completed Tasks (1)"));
        assert!(output.contains("[x] \u{2606} Buy milk"));
        assert!(!output.contains("Walk dog"));
        assert!(output.contains("d delete"));
    }

    #[test]
    fn empty_archive_panel() {
        let app = app_with(&["a"]);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_panel(frame, &app, ViewKind::Archived, area)
        });
        assert!(output.contains("Archived Tasks (0)"));
        assert!(output.contains("No archived tasks"));
    }
}
