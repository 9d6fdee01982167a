//! Grapheme-aware editing of a single-line text field.
//!
//! The field's text lives in the task list controller; these helpers take
//! the current text and a byte cursor and return the edited text and new
//! cursor, so every change can be forwarded as a single `set_buffer`.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Display width in terminal cells.
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Truncate to `max_cells` terminal cells, ending with `…` if cut.
pub fn truncate_to_width(s: &str, max_cells: usize) -> String {
    if display_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut width = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let gw = display_width(g);
        if width + gw > budget {
            break;
        }
        width += gw;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Longest prefix of `s` that fits in `max_cells`, cut at a grapheme
/// boundary without an ellipsis.
pub fn clip_to_width(s: &str, max_cells: usize) -> &str {
    let mut width = 0;
    for (i, g) in s.grapheme_indices(true) {
        width += display_width(g);
        if width > max_cells {
            return &s[..i];
        }
    }
    s
}

/// Start of the grapheme before `cursor`, or None at the start.
pub fn prev_boundary(s: &str, cursor: usize) -> Option<usize> {
    if cursor == 0 {
        return None;
    }
    s[..cursor].grapheme_indices(true).last().map(|(i, _)| i)
}

/// End of the grapheme at `cursor`, or None at the end.
pub fn next_boundary(s: &str, cursor: usize) -> Option<usize> {
    s[cursor..]
        .graphemes(true)
        .next()
        .map(|g| cursor + g.len())
}

fn is_blank(g: &str) -> bool {
    g.chars().all(char::is_whitespace)
}

/// Start of the word left of `cursor` (whitespace-delimited).
pub fn word_left(s: &str, cursor: usize) -> usize {
    let graphemes: Vec<(usize, &str)> = s[..cursor].grapheme_indices(true).collect();
    let mut idx = graphemes.len();
    while idx > 0 && is_blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    while idx > 0 && !is_blank(graphemes[idx - 1].1) {
        idx -= 1;
    }
    graphemes.get(idx).map_or(0, |(i, _)| *i)
}

/// Start of the next word right of `cursor`, or the end of the text.
pub fn word_right(s: &str, cursor: usize) -> usize {
    let mut pos = cursor;
    let mut seen_blank = false;
    for g in s[cursor..].graphemes(true) {
        let blank = is_blank(g);
        if seen_blank && !blank {
            return pos;
        }
        seen_blank |= blank;
        pos += g.len();
    }
    s.len()
}

/// Insert `text` at `cursor`.
pub fn insert(s: &str, cursor: usize, text: &str) -> (String, usize) {
    let mut out = String::with_capacity(s.len() + text.len());
    out.push_str(&s[..cursor]);
    out.push_str(text);
    out.push_str(&s[cursor..]);
    (out, cursor + text.len())
}

fn remove_range(s: &str, start: usize, end: usize) -> String {
    let mut out = String::with_capacity(s.len() - (end - start));
    out.push_str(&s[..start]);
    out.push_str(&s[end..]);
    out
}

/// Backspace. None when there is nothing to delete.
pub fn delete_back(s: &str, cursor: usize) -> Option<(String, usize)> {
    let start = prev_boundary(s, cursor)?;
    Some((remove_range(s, start, cursor), start))
}

/// Forward delete. None at the end of the text.
pub fn delete_forward(s: &str, cursor: usize) -> Option<(String, usize)> {
    let end = next_boundary(s, cursor)?;
    Some((remove_range(s, cursor, end), cursor))
}

/// Delete the word left of the cursor (Ctrl-W).
pub fn delete_word_back(s: &str, cursor: usize) -> Option<(String, usize)> {
    if cursor == 0 {
        return None;
    }
    let start = word_left(s, cursor);
    Some((remove_range(s, start, cursor), start))
}

/// Horizontal scroll for a field `width` cells wide: returns the byte
/// offset of the first visible grapheme and the cursor's column relative
/// to it. The cursor is kept inside the field, with one cell reserved for
/// it at the right edge.
pub fn scroll_window(s: &str, cursor: usize, width: usize) -> (usize, usize) {
    let cursor_col = display_width(&s[..cursor]);
    if width == 0 || cursor_col < width {
        return (0, cursor_col);
    }
    let mut start = 0;
    let mut col = cursor_col;
    for g in s[..cursor].graphemes(true) {
        if col < width {
            break;
        }
        col -= display_width(g);
        start += g.len();
    }
    (start, col)
}
