use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::task_item::StoreActions;
use crate::tui::app::{App, Mode};

use super::*;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => move_cursor(app, 1),
        KeyCode::Char('k') | KeyCode::Up => move_cursor(app, -1),
        KeyCode::Char('g') | KeyCode::Home => app.cursor = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.cursor = app.items.len().saturating_sub(1);
        }
        KeyCode::Char(' ') | KeyCode::Char('x') | KeyCode::Enter => toggle_cursor_task(app),
        KeyCode::Char('e') => enter_title_edit(app),
        KeyCode::Char('d') | KeyCode::Delete => remove_cursor_task(app),
        KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => app.mode = Mode::Insert,
        _ => {}
    }
}

fn move_cursor(app: &mut App, delta: isize) {
    if app.items.is_empty() {
        return;
    }
    let last = app.items.len() - 1;
    app.cursor = app.cursor.saturating_add_signed(delta).min(last);
}

/// Flip the done flag of the task under the cursor
pub(super) fn toggle_cursor_task(app: &mut App) {
    let Some(item) = app.items.get(app.cursor) else {
        return;
    };
    let mut actions = StoreActions {
        store: &mut app.store,
        prompt: &mut app.dialogs,
    };
    item.toggle(&mut actions);
    app.sync_items();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_helpers::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_cursor_movement_clamps() {
        let mut app = app_with(&["a", "b", "c"]);
        handle_key(&mut app, ch('k'));
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, key(KeyCode::Down));
        handle_key(&mut app, ch('j'));
        assert_eq!(app.cursor, 2);
        handle_key(&mut app, ch('g'));
        assert_eq!(app.cursor, 0);
        handle_key(&mut app, key(KeyCode::End));
        assert_eq!(app.cursor, 2);
    }

    #[test]
    fn test_space_toggles_cursor_task_twice() {
        let mut app = app_with(&["a", "b"]);
        handle_key(&mut app, ch('j'));
        handle_key(&mut app, ch(' '));
        assert!(!app.store.tasks()[0].done);
        assert!(app.store.tasks()[1].done);
        assert!(app.items[1].task().done);

        handle_key(&mut app, key(KeyCode::Enter));
        assert!(!app.store.tasks()[1].done);
    }

    #[test]
    fn test_toggle_on_empty_list_is_noop() {
        let mut app = app_with(&[]);
        app.mode = Mode::Navigate;
        handle_key(&mut app, ch(' '));
        assert!(app.store.is_empty());
    }

    #[test]
    fn test_a_focuses_input_and_q_quits() {
        let mut app = app_with(&["a"]);
        handle_key(&mut app, ch('a'));
        assert_eq!(app.mode, Mode::Insert);
        handle_key(&mut app, key(KeyCode::Esc));
        assert_eq!(app.mode, Mode::Navigate);
        handle_key(&mut app, ch('q'));
        assert!(app.should_quit);
    }
}
