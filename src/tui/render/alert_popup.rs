use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

/// Render the blocking alert raised by a rejected commit
pub fn render_alert_popup(frame: &mut Frame, app: &App, area: Rect) {
    let popup_w: u16 = 36.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let bg = app.theme.background;
    let message_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let button_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let message = app.alert.as_deref().unwrap_or("");

    let mut lines: Vec<Line> = vec![Line::from("")];
    for s in wrap_text(message, inner_w) {
        lines.push(Line::from(Span::styled(s, message_style)));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("[ OK ]", button_style)));

    // Dynamic height from content + 2 for borders
    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));

    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

/// Word-wrap `text` into lines of at most `max_width` characters.
fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if !current.is_empty() && current.chars().count() + 1 + word.chars().count() > max_width
        {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn wrap_text_splits_on_words() {
        assert_eq!(wrap_text("Task cannot be empty!", 40), vec!["Task cannot be empty!"]);
        assert_eq!(
            wrap_text("Task cannot be empty!", 12),
            vec!["Task cannot", "be empty!"]
        );
        assert_eq!(wrap_text("", 10), vec![""]);
    }

    #[test]
    fn popup_shows_message_and_ok() {
        let mut app = app_with_tasks(&[]);
        app.alert = Some("Task cannot be empty!".into());
        let output = render_to_string(TERM_W, 10, |frame, area| {
            render_alert_popup(frame, &app, area);
        });
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines.iter().any(|l| l.contains("Task cannot be empty!")));
        assert!(lines.iter().any(|l| l.contains("[ OK ]")));
        assert!(lines.iter().any(|l| l.contains('\u{250C}')));
    }
}
