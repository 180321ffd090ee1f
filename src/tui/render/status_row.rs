use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::push_right_hint;

/// Render the status row (bottom of screen): the current notice, if any,
/// and input hints while typing
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = Vec::new();
    if let Some(message) = app.notifier.current(Instant::now()) {
        spans.push(Span::styled(
            format!(" {}", message),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }

    if app.mode == Mode::Input {
        let hint = if app.edit_id.is_some() {
            "Enter update  Esc cancel "
        } else {
            "Enter add  Esc done "
        };
        push_right_hint(
            &mut spans,
            hint,
            Style::default().fg(app.theme.dim).bg(bg),
            width,
        );
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
