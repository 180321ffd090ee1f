use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

use super::push_right_hint;

const NAVIGATE_HINTS: &str = "n new  e edit  x done  s star  a archive  ? help ";

/// Counters for the completed and archived panels, plus key hints
pub fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let counts = app.counts();

    let mut spans = vec![
        Span::styled(
            format!(" \u{2713} {} completed", counts.completed),
            Style::default()
                .fg(app.theme.done)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" (c)   ", Style::default().fg(app.theme.dim).bg(bg)),
        Span::styled(
            format!("\u{25A3} {} archived", counts.archived),
            Style::default()
                .fg(app.theme.archived)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" (A)", Style::default().fg(app.theme.dim).bg(bg)),
    ];

    if app.ui.show_key_hints && app.mode == Mode::Navigate && app.overlay.is_none() {
        push_right_hint(
            &mut spans,
            NAVIGATE_HINTS,
            Style::default().fg(app.theme.dim).bg(bg),
            width,
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
