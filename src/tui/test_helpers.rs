use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::model::UiConfig;
use crate::model::task::{Task, TaskId};
use crate::ops::task_store::TaskStore;
use crate::ops::test_helpers::FixedClock;
use crate::tui::app::App;
use crate::tui::input::handle_key;

pub const TERM_W: u16 = 60;
pub const TERM_H: u16 = 12;

/// Render into an in-memory buffer, styles included.
pub fn render_to_buffer<F>(w: u16, h: u16, f: F) -> Buffer
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
    terminal.backend().buffer().clone()
}

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let buf = render_to_buffer(w, h, f);
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

/// An App whose tasks have ids 1, 2, 3... and whose clock sits at 100.
pub fn app_with(titles: &[&str]) -> App {
    let tasks = titles
        .iter()
        .enumerate()
        .map(|(i, t)| Task::new(TaskId(i as i64 + 1), *t))
        .collect();
    App::new(
        TaskStore::with_tasks(FixedClock(100), tasks),
        &UiConfig::default(),
    )
}

pub fn titles(app: &App) -> Vec<String> {
    app.store.tasks().iter().map(|t| t.title.clone()).collect()
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

pub fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        handle_key(app, ch(c));
    }
}
