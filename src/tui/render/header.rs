use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::ThemeMode;
use crate::tui::app::App;

use super::push_right_hint;

/// Title on the left, theme switch on the right
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = vec![Span::styled(
        " listo",
        Style::default()
            .fg(app.theme.highlight)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];

    let theme_label = match app.theme_mode() {
        ThemeMode::Dark => "\u{263E} dark (t) ",
        ThemeMode::Light => "\u{2600} light (t) ",
    };
    push_right_hint(
        &mut spans,
        theme_label,
        Style::default().fg(app.theme.dim).bg(bg),
        width,
    );

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}
