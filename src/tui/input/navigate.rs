use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::task_ops::Action;
use crate::tui::app::{App, Overlay};

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    let len = app.counts().active;

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,

        // Cursor
        KeyCode::Char('j') | KeyCode::Down => {
            if app.cursor + 1 < len {
                app.cursor += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cursor = app.cursor.saturating_sub(1);
        }
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => app.cursor = len.saturating_sub(1),

        // Input line
        KeyCode::Char('n') | KeyCode::Char('i') => app.start_new(),
        KeyCode::Char('e') | KeyCode::Enter => app.start_edit(),

        // Per-task toggles
        KeyCode::Char('x') | KeyCode::Char(' ') => {
            if let Some(id) = app.selected_id() {
                app.dispatch(Action::ToggleCompleted(id));
            }
        }
        KeyCode::Char('s') | KeyCode::Char('*') => {
            if let Some(id) = app.selected_id() {
                app.dispatch(Action::ToggleImportant(id));
            }
        }
        KeyCode::Char('a') => {
            if let Some(id) = app.selected_id() {
                app.dispatch(Action::ToggleArchived(id));
            }
        }

        // Panels
        KeyCode::Char('c') => app.toggle_overlay(Overlay::Completed),
        KeyCode::Char('A') => app.toggle_overlay(Overlay::Archived),
        KeyCode::Char('?') => app.toggle_overlay(Overlay::Help),

        KeyCode::Char('t') => app.toggle_theme(),
        _ => {}
    }
}
