use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::model::{Config, TaskId, UiConfig};
use crate::ops::task_item::TaskItemController;
use crate::ops::task_store::{Notice, Notifier, TaskError, TaskStore};
use crate::util::text_input::TextInput;

use super::dialog::Dialogs;
use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Moving through the list
    Navigate,
    /// Typing into the new-task input
    Insert,
    /// Editing the title of the task under the cursor
    Edit,
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    /// One controller per task, in list order
    pub items: Vec<TaskItemController>,
    /// Store revision `items` was last rebuilt from
    synced_revision: u64,
    pub mode: Mode,
    pub dialogs: Dialogs,
    pub new_task: TextInput,
    /// Cursor index into `items`
    pub cursor: usize,
    /// First visible row of the list
    pub scroll_offset: usize,
    pub theme: Theme,
    pub show_key_hints: bool,
    pub status_message: Option<String>,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: TaskStore, ui: &UiConfig) -> Self {
        let mode = if store.is_empty() {
            Mode::Insert
        } else {
            Mode::Navigate
        };
        let mut app = App {
            store,
            items: Vec::new(),
            synced_revision: 0,
            mode,
            dialogs: Dialogs::default(),
            new_task: TextInput::new(),
            cursor: 0,
            scroll_offset: 0,
            theme: Theme::from_config(ui),
            show_key_hints: ui.show_key_hints,
            status_message: None,
            should_quit: false,
        };
        app.rebuild_items();
        app
    }

    /// Bring `items` in line with the store after a change. Controllers are kept
    /// per task id so an item's draft and mode survive other items changing.
    pub fn sync_items(&mut self) {
        if self.store.revision() != self.synced_revision {
            self.rebuild_items();
        }
    }

    fn rebuild_items(&mut self) {
        let mut existing: HashMap<TaskId, TaskItemController> =
            self.items.drain(..).map(|item| (item.id(), item)).collect();
        self.items = self
            .store
            .tasks()
            .iter()
            .map(|task| match existing.remove(&task.id) {
                Some(mut item) => {
                    item.bind(task);
                    item
                }
                None => TaskItemController::new(task.clone()),
            })
            .collect();
        self.synced_revision = self.store.revision();
        self.clamp_cursor();

        // The edited item may have been removed underneath us
        if self.mode == Mode::Edit && !self.cursor_item().is_some_and(|i| i.is_editing()) {
            self.mode = Mode::Navigate;
        }
    }

    pub fn clamp_cursor(&mut self) {
        self.cursor = self.cursor.min(self.items.len().saturating_sub(1));
    }

    pub fn cursor_item(&self) -> Option<&TaskItemController> {
        self.items.get(self.cursor)
    }

    pub fn cursor_item_mut(&mut self) -> Option<&mut TaskItemController> {
        self.items.get_mut(self.cursor)
    }

    /// Move the cursor onto the task with `id`, if present
    pub fn select(&mut self, id: TaskId) {
        if let Some(idx) = self.items.iter().position(|i| i.id() == id) {
            self.cursor = idx;
        }
    }

    pub fn task_count(&self) -> usize {
        self.store.len()
    }

    /// Add each title in order before the UI starts. Duplicates are skipped and returned.
    pub fn seed(&mut self, titles: &[String]) -> Vec<TaskError> {
        let mut skipped = Vec::new();
        for title in titles {
            if let Err(e) = self.store.add(title, &mut DiscardNotices) {
                skipped.push(e);
            }
        }
        self.sync_items();
        if !self.store.is_empty() {
            self.mode = Mode::Navigate;
        }
        skipped
    }
}

/// Seed-time notifier: the error is reported by the caller instead
struct DiscardNotices;

impl Notifier for DiscardNotices {
    fn notify(&mut self, _notice: Notice) {}
}

/// Run the TUI application
pub fn run(config: &Config, seeds: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(TaskStore::default(), &config.ui);
    for e in app.seed(seeds) {
        eprintln!("warning: skipped seed task: {}", e);
    }
    info!(tasks = app.task_count(), "starting");

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

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    info!(tasks = app.task_count(), "exiting");
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
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
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
