pub mod alert_popup;
pub mod input_row;
pub mod status_row;
pub mod task_list_view;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

/// Main render function: dispatches to sub-renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title | gap | input row | gap | task list | status row
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1),
            Constraint::Length(3), // bordered input field
            Constraint::Length(1),
            Constraint::Min(1), // task rows
            Constraint::Length(1),
        ])
        .split(area);

    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(app.theme.background)
        .add_modifier(Modifier::BOLD);
    let title = Paragraph::new(Line::from(Span::styled(app.ui.title.clone(), title_style)))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    input_row::render_input_row(frame, app, chunks[2]);
    task_list_view::render_task_list(frame, app, chunks[4]);
    status_row::render_status_row(frame, app, chunks[5]);

    // Alert popup (rendered on top of everything)
    if app.alert.is_some() {
        alert_popup::render_alert_popup(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn full_screen_idle() {
        let mut app = app_with_tasks(&["Buy milk", "Walk dog"]);
        let output = render_to_string(40, 12, |frame, _| render(frame, &mut app));
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0].trim(), "To-Do List");
        assert!(lines[3].contains("Enter task"));
        assert!(lines[3].contains("[ Add ]"));
        assert!(lines[6].contains("Buy milk"));
        assert!(lines[7].contains("Walk dog"));
    }

    #[test]
    fn full_screen_with_alert() {
        let mut app = app_with_tasks(&[]);
        app.alert = Some("Task cannot be empty!".into());
        let output = render_to_string(40, 12, |frame, _| render(frame, &mut app));
        assert!(output.contains("Task cannot be empty!"));
        assert!(output.contains("[ OK ]"));
    }

    #[test]
    fn custom_title() {
        let mut app = app_with_tasks(&[]);
        app.ui.title = "Groceries".into();
        let output = render_to_string(40, 12, |frame, _| render(frame, &mut app));
        assert_eq!(output.lines().next().map(str::trim), Some("Groceries"));
    }
}
