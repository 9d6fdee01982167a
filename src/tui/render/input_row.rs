use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::app::App;
use crate::util::line_edit;

const ADD_LABEL: &str = "[ Add ]";

/// Render the top input field and the Add button.
///
/// The field shows the shared buffer. While a task is being edited the
/// cursor lives in that task's row, so this field is drawn dimmed.
pub fn render_input_row(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(ADD_LABEL.len() as u16),
        ])
        .split(area);

    let bg = app.theme.background;
    let active = !app.is_editing();
    let border_color = if active {
        app.theme.highlight
    } else {
        app.theme.dim
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(app.theme.field_bg));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let field_w = inner.width as usize;
    let buffer = app.buffer();
    let line = if buffer.is_empty() {
        Line::from(Span::styled(
            line_edit::truncate_to_width(&app.ui.placeholder, field_w),
            Style::default().fg(app.theme.dim),
        ))
    } else if active {
        let (start, _) = line_edit::scroll_window(buffer, app.cursor, field_w);
        Line::from(Span::styled(
            line_edit::clip_to_width(&buffer[start..], field_w).to_string(),
            Style::default().fg(app.theme.text_bright),
        ))
    } else {
        Line::from(Span::styled(
            line_edit::truncate_to_width(buffer, field_w),
            Style::default().fg(app.theme.dim),
        ))
    };
    frame.render_widget(
        Paragraph::new(line).style(Style::default().bg(app.theme.field_bg)),
        inner,
    );

    if active && app.alert.is_none() && inner.width > 0 {
        let (_, col) = line_edit::scroll_window(buffer, app.cursor, field_w);
        frame.set_cursor_position((inner.x + col as u16, inner.y));
    }

    let button_style = Style::default()
        .fg(if active {
            app.theme.text_bright
        } else {
            app.theme.dim
        })
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let button_area = Rect::new(chunks[2].x, chunks[2].y + chunks[2].height / 2, chunks[2].width, 1);
    frame.render_widget(
        Paragraph::new(Span::styled(ADD_LABEL, button_style)),
        button_area,
    );
}
