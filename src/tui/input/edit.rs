use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;
use crate::util::line_edit;

/// Text editing keys for the shared input field
pub(super) fn handle_edit_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);
    let buffer = app.buffer();
    let cursor = app.cursor;

    let edited = match key.code {
        KeyCode::Char(c) if !ctrl && !alt => {
            let mut s = [0u8; 4];
            insert_text(app, c.encode_utf8(&mut s));
            return;
        }
        KeyCode::Char('w') if ctrl => line_edit::delete_word_back(buffer, cursor),
        KeyCode::Backspace if ctrl || alt => line_edit::delete_word_back(buffer, cursor),
        KeyCode::Backspace => line_edit::delete_back(buffer, cursor),
        KeyCode::Delete => line_edit::delete_forward(buffer, cursor),
        KeyCode::Left if ctrl || alt => {
            app.cursor = line_edit::word_left(buffer, cursor);
            return;
        }
        KeyCode::Right if ctrl || alt => {
            app.cursor = line_edit::word_right(buffer, cursor);
            return;
        }
        KeyCode::Left => {
            app.cursor = line_edit::prev_boundary(buffer, cursor).unwrap_or(0);
            return;
        }
        KeyCode::Right => {
            app.cursor = line_edit::next_boundary(buffer, cursor).unwrap_or(buffer.len());
            return;
        }
        KeyCode::Home => {
            app.cursor = 0;
            return;
        }
        KeyCode::End => {
            app.cursor = buffer.len();
            return;
        }
        _ => None,
    };

    if let Some((text, cursor)) = edited {
        app.set_buffer(text, cursor);
    }
}

pub(super) fn insert_text(app: &mut App, text: &str) {
    let (buffer, cursor) = line_edit::insert(app.buffer(), app.cursor, text);
    app.set_buffer(buffer, cursor);
}
