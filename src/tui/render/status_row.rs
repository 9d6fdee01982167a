use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Key hints for the current state
fn key_hints(app: &App) -> &'static str {
    if app.alert.is_some() {
        "Enter/Esc dismiss"
    } else if app.is_editing() {
        "Enter save  Esc cancel  ^D delete  ^Q quit"
    } else {
        "Enter add  ^E edit  ^D delete  \u{2191}\u{2193} select  ^Q quit"
    }
}

/// Render the status row (bottom of screen): key hints left, task count right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let dim = Style::default().fg(app.theme.dim).bg(bg);

    let count = app.tasks.tasks().len();
    let counter = match count {
        1 => "1 task".to_string(),
        n => format!("{} tasks", n),
    };

    let mut spans = Vec::new();
    let mut used = 0;
    if app.ui.show_key_hints {
        let hint = key_hints(app);
        let hint_width = hint.chars().count();
        if hint_width + 1 + counter.len() <= width {
            spans.push(Span::styled(hint, dim));
            used = hint_width;
        }
    }
    if used + counter.len() <= width {
        let padding = width - used - counter.len();
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(counter, dim));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use insta::assert_snapshot;

    fn render_status(app: &App, w: u16) -> String {
        render_to_string(w, 1, |frame, area| render_status_row(frame, app, area))
    }

    #[test]
    fn idle_hints_and_count() {
        let app = app_with_tasks(&["A", "B"]);
        let output = render_status(&app, 70);
        assert_snapshot!(output, @"Enter add  ^E edit  ^D delete  ↑↓ select  ^Q quit              2 tasks");
    }

    #[test]
    fn editing_hints() {
        let app = app_editing(&["A"], "1");
        let output = render_status(&app, 60);
        assert!(output.starts_with("Enter save  Esc cancel"));
        assert!(output.ends_with("1 task"));
    }

    #[test]
    fn hints_disabled() {
        let mut app = app_with_tasks(&[]);
        app.ui.show_key_hints = false;
        assert_eq!(render_status(&app, 20).trim(), "0 tasks");
    }

    #[test]
    fn narrow_terminal_drops_hints() {
        let app = app_with_tasks(&["A"]);
        assert_eq!(render_status(&app, 12).trim(), "1 task");
    }
}
