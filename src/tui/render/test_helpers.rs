use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::config::UiConfig;
use crate::model::task::Task;
use crate::ops::task_ops::TaskListController;
use crate::tui::app::App;

pub const TERM_W: u16 = 40;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App whose tasks get ids "1", "2", ... in order.
pub fn app_with_tasks(texts: &[&str]) -> App {
    let tasks = texts
        .iter()
        .enumerate()
        .map(|(i, text)| Task::new((i + 1).to_string(), *text))
        .collect();
    App::with_controller(TaskListController::with_tasks(tasks), &UiConfig::default())
}

/// Build an App editing the task with `id`.
pub fn app_editing(texts: &[&str], id: &str) -> App {
    let mut app = app_with_tasks(texts);
    app.apply(crate::ops::task_ops::Intent::StartEdit(id.to_string()));
    app
}
