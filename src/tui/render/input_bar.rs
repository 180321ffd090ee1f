use ratatui::Frame;
use ratatui::layout::{Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_segmentation::UnicodeSegmentation;

use crate::tui::app::{App, Mode};
use crate::util::unicode;

const PLACEHOLDER: &str = "Enter a task...";

/// The task input box. Its title reads "Add" or "Update" depending on
/// whether a task is being edited.
pub fn render_input_bar(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.mode == Mode::Input;
    let bg = app.theme.input_bg;
    let border_color = if focused {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let title = if app.edit_id.is_some() {
        " Update "
    } else {
        " Add "
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(app.theme.background))
        .title(Span::styled(
            title,
            Style::default()
                .fg(border_color)
                .bg(app.theme.background)
                .add_modifier(Modifier::BOLD),
        ))
        .style(Style::default().bg(bg));
    let inner = block.inner(area);

    let line = if app.input.is_empty() {
        Line::from(Span::styled(
            format!(" {}", PLACEHOLDER),
            Style::default().fg(app.theme.dim).bg(bg),
        ))
    } else {
        let width = (inner.width as usize).saturating_sub(2);
        let (visible, _) = visible_window(&app.input, app.input_cursor, width);
        Line::from(Span::styled(
            format!(" {}", visible),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ))
    };

    frame.render_widget(Paragraph::new(line).block(block), area);

    if focused && inner.width > 1 && inner.height > 0 {
        let width = (inner.width as usize).saturating_sub(2);
        let (_, col) = visible_window(&app.input, app.input_cursor, width);
        let x = inner.x + 1 + col.min(width) as u16;
        frame.set_cursor_position(Position::new(x, inner.y));
    }
}

/// Slice of `input` to show in `width` cells so the cursor stays visible,
/// plus the cursor's column within that slice.
fn visible_window(input: &str, cursor: usize, width: usize) -> (&str, usize) {
    let cursor_col = unicode::byte_offset_to_display_col(input, cursor);
    if cursor_col < width || width == 0 {
        return (input, cursor_col);
    }
    // Drop leading graphemes until the cursor fits in the last column
    let mut skipped = 0;
    for (offset, g) in input.grapheme_indices(true) {
        if cursor_col - skipped < width {
            return (&input[offset..], cursor_col - skipped);
        }
        skipped += unicode::display_width(g);
    }
    ("", 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn placeholder_and_add_title() {
        let app = app_with(&[]);
        let output = render_to_string(30, 3, |frame, area| render_input_bar(frame, &app, area));
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].contains(" Add "));
        assert!(lines[1].contains("Enter a task..."));
    }

    #[test]
    fn update_title_while_editing() {
        let mut app = app_with(&["Buy milk"]);
        app.start_edit();
        let output = render_to_string(30, 3, |frame, area| render_input_bar(frame, &app, area));
        assert!(output.contains(" Update "));
        assert!(output.contains("Buy milk"));
        assert!(!output.contains("Enter a task"));
    }

    #[test]
    fn window_keeps_cursor_visible() {
        assert_eq!(visible_window("hello", 5, 10), ("hello", 5));
        let (visible, col) = visible_window("abcdefghij", 10, 4);
        assert_eq!(visible, "hij");
        assert_eq!(col, 3);
        let (visible, col) = visible_window("abcdefghij", 2, 4);
        assert_eq!(visible, "abcdefghij");
        assert_eq!(col, 2);
    }
}
