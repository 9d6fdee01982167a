mod edit;
mod list;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::App;

use edit::*;
use list::*;

/// Handle a key event
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // The alert blocks everything until dismissed
    if app.alert.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            app.dismiss_alert();
        }
        return;
    }

    match (key.modifiers, key.code) {
        (KeyModifiers::CONTROL, KeyCode::Char('c' | 'q')) => app.should_quit = true,
        (_, KeyCode::Enter) => commit(app),
        (_, KeyCode::Esc) => cancel_edit(app),
        (KeyModifiers::CONTROL, KeyCode::Char('e')) => start_edit_selected(app),
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => delete_selected(app),
        (_, KeyCode::Up) => app.move_selection(-1),
        (_, KeyCode::Down) => app.move_selection(1),
        _ => handle_edit_key(app, key),
    }
}

/// Handle a bracketed paste: insert at the cursor with newlines flattened
pub fn handle_paste(app: &mut App, text: &str) {
    if app.alert.is_some() || text.is_empty() {
        return;
    }
    let clean = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
    insert_text(app, &clean);
}
