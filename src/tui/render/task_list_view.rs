use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::task::EditTarget;
use crate::tui::app::App;
use crate::util::line_edit;

/// Action labels shown at the right of a row
fn row_actions(edit_target: &EditTarget, task_id: &str) -> &'static str {
    match edit_target {
        EditTarget::Editing(id) if id == task_id => "[Save]",
        EditTarget::Editing(_) => "[Delete]",
        EditTarget::Idle => "[Edit] [Delete]",
    }
}

/// Render the task rows, one line per task
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let height = area.height as usize;
    let count = app.tasks.tasks().len();

    if count == 0 {
        let empty = Paragraph::new(Span::styled(
            "  No tasks yet",
            Style::default().fg(app.theme.dim).bg(bg),
        ));
        frame.render_widget(empty, area);
        return;
    }
    if height == 0 {
        return;
    }

    // Keep the selected row in view
    if app.selected < app.scroll_offset {
        app.scroll_offset = app.selected;
    } else if app.selected >= app.scroll_offset + height {
        app.scroll_offset = app.selected + 1 - height;
    }
    app.scroll_offset = app.scroll_offset.min(count.saturating_sub(height));

    let width = area.width as usize;
    let edit_target = app.tasks.edit_target();

    for (row, task) in app
        .tasks
        .tasks()
        .iter()
        .enumerate()
        .skip(app.scroll_offset)
        .take(height)
    {
        let is_selected = row == app.selected;
        let is_editing = edit_target.is_editing_task(&task.id);
        let row_bg = if is_selected {
            app.theme.selection_bg
        } else {
            bg
        };

        let actions = row_actions(edit_target, &task.id);
        // marker (2) + text + space + actions
        let text_w = width.saturating_sub(2 + 1 + actions.len());

        let marker = if is_selected { "\u{25B8} " } else { "  " };
        let mut spans = vec![Span::styled(
            marker,
            Style::default().fg(app.theme.highlight).bg(row_bg),
        )];

        let shown = if is_editing {
            let buffer = app.tasks.buffer();
            let (start, col) = line_edit::scroll_window(buffer, app.cursor, text_w);
            let visible = line_edit::clip_to_width(&buffer[start..], text_w).to_string();
            if app.alert.is_none() && text_w > 0 {
                let y = area.y + (row - app.scroll_offset) as u16;
                frame.set_cursor_position((area.x + 2 + col as u16, y));
            }
            spans.push(Span::styled(
                visible.clone(),
                Style::default()
                    .fg(app.theme.text_bright)
                    .bg(app.theme.field_bg),
            ));
            visible
        } else {
            let text = line_edit::truncate_to_width(&task.text, text_w);
            let fg = if is_selected {
                app.theme.text_bright
            } else {
                app.theme.text
            };
            spans.push(Span::styled(text.clone(), Style::default().fg(fg).bg(row_bg)));
            text
        };

        let pad = text_w.saturating_sub(line_edit::display_width(&shown));
        let pad_bg = if is_editing {
            app.theme.field_bg
        } else {
            row_bg
        };
        spans.push(Span::styled(" ".repeat(pad), Style::default().bg(pad_bg)));
        spans.push(Span::styled(" ", Style::default().bg(row_bg)));
        spans.push(Span::styled(
            actions,
            Style::default()
                .fg(if is_editing {
                    app.theme.highlight
                } else {
                    app.theme.dim
                })
                .bg(row_bg)
                .add_modifier(Modifier::BOLD),
        ));

        let y = area.y + (row - app.scroll_offset) as u16;
        frame.render_widget(
            Paragraph::new(Line::from(spans)),
            Rect::new(area.x, y, area.width, 1),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    fn render_list(app: &mut App, h: u16) -> String {
        render_to_string(TERM_W, h, |frame, area| {
            render_task_list(frame, app, area);
        })
    }

    #[test]
    fn empty_list() {
        let mut app = app_with_tasks(&[]);
        assert_eq!(render_list(&mut app, 3), "  No tasks yet");
    }

    #[test]
    fn idle_rows_offer_edit_and_delete() {
        let mut app = app_with_tasks(&["Buy milk", "Walk dog"]);
        let output = render_list(&mut app, 3);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("\u{25B8} Buy milk"));
        assert!(lines[0].ends_with("[Edit] [Delete]"));
        assert!(lines[1].starts_with("  Walk dog"));
        assert!(lines[1].ends_with("[Edit] [Delete]"));
    }

    #[test]
    fn editing_row_offers_save_others_delete() {
        let mut app = app_editing(&["A", "B"], "2");
        app.set_buffer("B edited".into(), 8);
        let output = render_list(&mut app, 3);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[0].contains('A'));
        assert!(lines[0].ends_with("[Delete]"));
        assert!(!lines[0].contains("[Edit]"));
        assert!(lines[1].contains("B edited"));
        assert!(lines[1].ends_with("[Save]"));
    }

    #[test]
    fn long_text_truncated() {
        let long = "x".repeat(60);
        let mut app = app_with_tasks(&[long.as_str()]);
        let output = render_list(&mut app, 1);
        assert!(output.contains('\u{2026}'));
        assert!(output.ends_with("[Edit] [Delete]"));
    }

    #[test]
    fn scrolls_to_selection() {
        let mut app = app_with_tasks(&["t1", "t2", "t3", "t4", "t5"]);
        app.selected = 4;
        let output = render_list(&mut app, 2);
        assert_eq!(app.scroll_offset, 3);
        assert!(output.contains("t4"));
        assert!(output.contains("t5"));
        assert!(!output.contains("t1"));
    }
}
