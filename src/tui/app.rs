use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::list_io::{load_list, save_list};
use crate::model::{Config, TaskList};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Single-line input for adding or editing a task
    Edit,
    /// Pending confirmation prompt
    Confirm,
}

/// What a pending confirmation will do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    ClearAll,
}

/// A status-row message, cleared on the next keypress
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// Main application state
pub struct App {
    pub list: TaskList,
    /// Task file this session reads and writes
    pub path: PathBuf,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub mode: Mode,
    /// Cursor index into the task list
    pub cursor: usize,
    /// First visible row of the list view
    pub scroll_offset: usize,
    /// Edit-mode input buffer
    pub edit_buffer: String,
    /// Byte offset of the input cursor within `edit_buffer`
    pub edit_cursor: usize,
    /// Index being edited, or None when adding a new task
    pub edit_target: Option<usize>,
    pub confirm: Option<ConfirmAction>,
    pub status: Option<Status>,
    /// Changes since the last successful save
    pub unsaved: bool,
    pub should_quit: bool,
}

impl App {
    pub fn new(list: TaskList, path: PathBuf, config: &Config) -> Self {
        App {
            list,
            path,
            theme: Theme::from_config(&config.ui),
            show_key_hints: config.ui.show_key_hints,
            mode: Mode::Navigate,
            cursor: 0,
            scroll_offset: 0,
            edit_buffer: String::new(),
            edit_cursor: 0,
            edit_target: None,
            confirm: None,
            status: None,
            unsaved: false,
            should_quit: false,
        }
    }

    pub fn info(&mut self, msg: impl Into<String>) {
        self.status = Some(Status::Info(msg.into()));
    }

    pub fn error(&mut self, msg: impl Into<String>) {
        self.status = Some(Status::Error(msg.into()));
    }

    /// Keep the cursor on a task after deletions
    pub fn clamp_cursor(&mut self) {
        if self.list.is_empty() {
            self.cursor = 0;
        } else {
            self.cursor = self.cursor.min(self.list.len() - 1);
        }
    }

    /// Adjust scroll so the cursor row is on screen
    pub fn ensure_cursor_visible(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.cursor >= self.scroll_offset + height {
            self.scroll_offset = self.cursor + 1 - height;
        }
    }

    /// Save the list, recording the outcome in the status row.
    /// Returns whether the write succeeded.
    pub fn save(&mut self) -> bool {
        match save_list(&self.path, &self.list) {
            Ok(()) => {
                self.unsaved = false;
                let noun = if self.list.len() == 1 { "task" } else { "tasks" };
                self.info(format!(
                    "saved {} {} to {}",
                    self.list.len(),
                    noun,
                    self.path.display()
                ));
                true
            }
            Err(e) => {
                self.error(e.to_string());
                false
            }
        }
    }
}

/// Run the TUI application
pub fn run(path: PathBuf, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let list = load_list(&path)?;
    let mut app = App::new(list, path, config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
