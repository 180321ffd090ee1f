use std::io;
use std::path::Path;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::config_io::read_config;
use crate::io::paths::{config_path, log_path, resolve_data_dir};
use crate::io::session::Session;
use crate::io::storage::{FileStore, KeyValueStore, MemoryStore};
use crate::model::{Task, TaskId, ThemeMode, UiConfig};
use crate::ops::notifier::Notifier;
use crate::ops::task_ops::Action;
use crate::ops::views::{ViewCounts, ViewKind, view};

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving around the active list
    Navigate,
    /// Typing into the task input line
    Input,
}

/// A panel drawn over the main list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    Completed,
    Archived,
    Help,
}

impl Overlay {
    /// The task view a panel lists, if it lists one
    pub fn view_kind(self) -> Option<ViewKind> {
        match self {
            Overlay::Completed => Some(ViewKind::Completed),
            Overlay::Archived => Some(ViewKind::Archived),
            Overlay::Help => None,
        }
    }
}

/// Store type behind the TUI session
pub type BoxedStore = Box<dyn KeyValueStore>;

/// Main application state
pub struct App {
    pub session: Session<BoxedStore>,
    pub ui: UiConfig,
    pub theme: Theme,
    pub mode: Mode,
    pub should_quit: bool,
    /// Cursor index into the active view
    pub cursor: usize,
    /// First visible row of the active list
    pub scroll: usize,
    pub overlay: Option<Overlay>,
    /// Cursor index into the overlay's view
    pub overlay_cursor: usize,
    /// Text being typed into the input line
    pub input: String,
    /// Byte offset of the input cursor
    pub input_cursor: usize,
    /// Task being edited; None means the input line adds a new task
    pub edit_id: Option<TaskId>,
    pub notifier: Notifier,
}

impl App {
    pub fn new(session: Session<BoxedStore>, ui: UiConfig) -> Self {
        let theme = Theme::for_mode(session.theme(), &ui);
        let notifier = Notifier::new(Duration::from_secs(ui.notice_secs));
        App {
            session,
            ui,
            theme,
            mode: Mode::Navigate,
            should_quit: false,
            cursor: 0,
            scroll: 0,
            overlay: None,
            overlay_cursor: 0,
            input: String::new(),
            input_cursor: 0,
            edit_id: None,
            notifier,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.session.list().tasks()
    }

    pub fn view(&self, kind: ViewKind) -> Vec<&Task> {
        view(self.tasks(), kind)
    }

    pub fn counts(&self) -> ViewCounts {
        ViewCounts::of(self.tasks())
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.session.theme()
    }

    /// Task under the cursor in the active list
    pub fn selected_id(&self) -> Option<TaskId> {
        self.view(ViewKind::Active).get(self.cursor).map(|t| t.id)
    }

    /// Task under the cursor in the open overlay
    pub fn overlay_selected_id(&self) -> Option<TaskId> {
        let kind = self.overlay?.view_kind()?;
        self.view(kind).get(self.overlay_cursor).map(|t| t.id)
    }

    /// Run an action through the session and show its notice.
    /// Returns the id of the task it touched, if anything changed.
    pub fn dispatch(&mut self, action: Action) -> Option<TaskId> {
        let notice = match self.session.dispatch(action) {
            Ok(notice) => notice?,
            Err(failed) => {
                // The list in memory has already changed; only the snapshot is lost
                tracing::error!(error = %failed.source, "could not save tasks");
                failed.notice
            }
        };
        self.notifier.show(notice.message.clone(), Instant::now());
        self.clamp_cursors();
        Some(notice.task_id)
    }

    pub fn toggle_theme(&mut self) {
        let mode = self.theme_mode().toggled();
        if let Err(e) = self.session.set_theme(mode) {
            tracing::error!(error = %e, "could not save theme preference");
        }
        self.theme = Theme::for_mode(mode, &self.ui);
    }

    /// Open `overlay`, or close it if it is already open
    pub fn toggle_overlay(&mut self, overlay: Overlay) {
        if self.overlay == Some(overlay) {
            self.overlay = None;
        } else {
            self.overlay = Some(overlay);
            self.overlay_cursor = 0;
        }
    }

    pub fn close_overlay(&mut self) {
        self.overlay = None;
    }

    /// Focus the input line for a new task
    pub fn start_new(&mut self) {
        self.edit_id = None;
        self.set_input(String::new());
        self.mode = Mode::Input;
    }

    /// Load the selected task's text into the input line for editing
    pub fn start_edit(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        let Some(text) = self.session.list().get(id).map(|t| t.text.clone()) else {
            return;
        };
        self.edit_id = Some(id);
        self.set_input(text);
        self.mode = Mode::Input;
    }

    /// Submit the input line: update the task being edited, or add a new one.
    /// Blank input does nothing and keeps the line focused.
    pub fn submit_input(&mut self) {
        if self.input.trim().is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.input);
        self.input_cursor = 0;
        match self.edit_id.take() {
            Some(id) => {
                self.dispatch(Action::Edit { id, text });
                self.mode = Mode::Navigate;
            }
            None => {
                if let Some(id) = self.dispatch(Action::Add(text)) {
                    self.select(id);
                }
            }
        }
    }

    /// Leave the input line, discarding its text and any pending edit
    pub fn cancel_input(&mut self) {
        self.edit_id = None;
        self.set_input(String::new());
        self.mode = Mode::Navigate;
    }

    pub fn set_input(&mut self, text: String) {
        self.input_cursor = text.len();
        self.input = text;
    }

    /// Move the active-list cursor onto `id` if it is in the active view
    pub fn select(&mut self, id: TaskId) {
        if let Some(pos) = self.view(ViewKind::Active).iter().position(|t| t.id == id) {
            self.cursor = pos;
        }
    }

    /// Keep both cursors inside their lists after the list changed
    pub fn clamp_cursors(&mut self) {
        let active = self.counts().active;
        self.cursor = self.cursor.min(active.saturating_sub(1));
        if let Some(kind) = self.overlay.and_then(Overlay::view_kind) {
            let len = self.counts().get(kind);
            self.overlay_cursor = self.overlay_cursor.min(len.saturating_sub(1));
        }
    }

    /// Adjust scroll so the cursor row is visible in a list of `height` rows
    pub fn scroll_to_cursor(&mut self, height: usize) {
        if height == 0 {
            return;
        }
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + height {
            self.scroll = self.cursor + 1 - height;
        }
    }
}

/// Run the TUI application
pub fn run(data_dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let config = read_config(&config_path())?;
    let data_dir = resolve_data_dir(data_dir, &config);
    crate::logging::init_file(&log_path(&data_dir));

    let store: BoxedStore = match FileStore::open(&data_dir) {
        Ok(store) => Box::new(store),
        Err(e) => {
            // Keep working for this run; nothing will be saved
            tracing::error!(error = %e, "data directory unavailable, using memory store");
            Box::new(MemoryStore::new())
        }
    };
    tracing::info!(dir = %data_dir.display(), "starting tui");
    let session = Session::load(store);
    let mut app = App::new(session, config.ui);

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
        app.notifier.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
