pub mod footer;
pub mod header;
pub mod help_overlay;
pub mod input_bar;
pub mod panel;
pub mod status_row;
pub mod task_list;
#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Block;

use crate::model::Task;
use crate::util::unicode;

use super::app::{App, Overlay};
use super::theme::Theme;

/// Main render function, dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header | input box | task list | counters | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    input_bar::render_input_bar(frame, app, chunks[1]);
    task_list::render_task_list(frame, app, chunks[2]);
    footer::render_footer(frame, app, chunks[3]);
    status_row::render_status_row(frame, app, chunks[4]);

    // Panels are drawn over everything else
    match app.overlay {
        Some(Overlay::Help) => help_overlay::render_help_overlay(frame, app, area),
        Some(overlay) => {
            if let Some(kind) = overlay.view_kind() {
                panel::render_panel(frame, app, kind, area);
            }
        }
        None => {}
    }
}

/// One task as a single display line: checkbox, star, text.
/// Completed tasks are struck through; the selected row is padded
/// to `width` so its background fills the line.
pub(super) fn task_line(theme: &Theme, task: &Task, selected: bool, width: usize) -> Line<'static> {
    let bg = if selected {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().bg(bg);

    let checkbox_color = if task.completed { theme.done } else { theme.dim };
    let (star, star_color) = if task.important {
        ("\u{2605}", theme.important)
    } else {
        ("\u{2606}", theme.dim)
    };
    let mut text_style = base.fg(if selected { theme.text_bright } else { theme.text });
    if task.completed || task.archived {
        text_style = text_style.fg(theme.dim).add_modifier(Modifier::CROSSED_OUT);
    }
    if selected {
        text_style = text_style.add_modifier(Modifier::BOLD);
    }

    let prefix = format!(" [{}] ", task.checkbox_char());
    let star_part = format!("{} ", star);
    let used = unicode::display_width(&prefix) + unicode::display_width(&star_part);
    let text = unicode::truncate_to_width(&task.text, width.saturating_sub(used + 1));

    let mut spans = vec![
        Span::styled(prefix, base.fg(checkbox_color)),
        Span::styled(star_part, base.fg(star_color)),
        Span::styled(text, text_style),
    ];

    if selected {
        let content: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
        if content < width {
            spans.push(Span::styled(" ".repeat(width - content), base));
        }
    }
    Line::from(spans)
}

/// Right-align `hint` after the existing spans within `width`, if it fits
pub(super) fn push_right_hint(spans: &mut Vec<Span<'static>>, hint: &str, style: Style, width: usize) {
    let content: usize = spans.iter().map(|s| unicode::display_width(&s.content)).sum();
    let hint_width = unicode::display_width(hint);
    if content + hint_width < width {
        let padding = width - content - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(style.bg.unwrap_or_default())));
        spans.push(Span::styled(hint.to_string(), style));
    }
}

/// Create a centered rectangle of the given percentage of the parent
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
