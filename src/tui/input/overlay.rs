use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::task_ops::Action;
use crate::tui::app::{App, Overlay};

pub(super) fn handle_overlay(app: &mut App, key: KeyEvent) {
    let Some(overlay) = app.overlay else {
        return;
    };

    match (overlay, key.code) {
        (Overlay::Help, KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Esc) => {
            app.close_overlay();
        }
        (Overlay::Help, _) => {}

        (_, KeyCode::Esc | KeyCode::Char('q')) => app.close_overlay(),
        (Overlay::Completed, KeyCode::Char('c')) | (Overlay::Archived, KeyCode::Char('A')) => {
            app.close_overlay();
        }

        (_, KeyCode::Char('j') | KeyCode::Down) => {
            let len = overlay
                .view_kind()
                .map_or(0, |kind| app.counts().get(kind));
            if app.overlay_cursor + 1 < len {
                app.overlay_cursor += 1;
            }
        }
        (_, KeyCode::Char('k') | KeyCode::Up) => {
            app.overlay_cursor = app.overlay_cursor.saturating_sub(1);
        }

        // Completed panel: mark incomplete or delete forever
        (Overlay::Completed, KeyCode::Char('u') | KeyCode::Char(' ') | KeyCode::Enter) => {
            if let Some(id) = app.overlay_selected_id() {
                app.dispatch(Action::ToggleCompleted(id));
            }
        }
        (Overlay::Completed, KeyCode::Char('d') | KeyCode::Delete) => {
            if let Some(id) = app.overlay_selected_id() {
                app.dispatch(Action::Remove(id));
            }
        }

        // Archived panel: unarchive
        (Overlay::Archived, KeyCode::Char('u') | KeyCode::Char(' ') | KeyCode::Enter) => {
            if let Some(id) = app.overlay_selected_id() {
                app.dispatch(Action::ToggleArchived(id));
            }
        }
        _ => {}
    }
}
