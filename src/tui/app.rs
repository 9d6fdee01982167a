use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::config::{AppConfig, UiConfig};
use crate::model::task::Task;
use crate::ops::task_ops::{Intent, TaskListController};

use super::input;
use super::render;
use super::theme::Theme;

/// Main application state
pub struct App {
    pub tasks: TaskListController,
    pub ui: UiConfig,
    pub theme: Theme,
    /// Byte offset of the text cursor within the buffer
    pub cursor: usize,
    /// Selected row in the task list
    pub selected: usize,
    /// First visible row of the task list
    pub scroll_offset: usize,
    /// Blocking alert message; all input goes to the alert while set
    pub alert: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_controller(
            TaskListController::new().trim_on_commit(config.tasks.trim_on_commit),
            &config.ui,
        )
    }

    pub fn with_controller(tasks: TaskListController, ui: &UiConfig) -> Self {
        let cursor = tasks.buffer().len();
        App {
            tasks,
            ui: ui.clone(),
            theme: Theme::from_config(ui),
            cursor,
            selected: 0,
            scroll_offset: 0,
            alert: None,
            should_quit: false,
        }
    }

    pub fn buffer(&self) -> &str {
        self.tasks.buffer()
    }

    pub fn is_editing(&self) -> bool {
        self.tasks.edit_target().is_editing()
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.tasks.tasks().get(self.selected)
    }

    /// Replace the buffer and move the text cursor.
    pub fn set_buffer(&mut self, text: String, cursor: usize) {
        self.cursor = cursor.min(text.len());
        self.tasks.set_buffer(text);
    }

    /// Forward an intent to the controller. A rejected commit raises the
    /// blocking alert.
    pub fn apply(&mut self, intent: Intent) {
        let moves_cursor = !matches!(intent, Intent::SetBuffer(_));
        if let Err(e) = self.tasks.dispatch(intent) {
            self.alert = Some(e.to_string());
            return;
        }
        if moves_cursor {
            self.cursor = self.buffer().len();
        }
        self.clamp_selection();
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn move_selection(&mut self, delta: isize) {
        let count = self.tasks.tasks().len();
        if count == 0 {
            self.selected = 0;
            return;
        }
        self.selected = self.selected.saturating_add_signed(delta).min(count - 1);
    }

    fn clamp_selection(&mut self) {
        let count = self.tasks.tasks().len();
        self.selected = self.selected.min(count.saturating_sub(1));
    }
}

/// Run the TUI application
pub fn run(config: &AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    tracing::info!("tui started");
    let result = run_event_loop(&mut terminal, &mut app);
    tracing::info!(tasks = app.tasks.tasks().len(), "tui exiting");

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    input::handle_key(app, key);
                }
                Event::Paste(text) => input::handle_paste(app, &text),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
