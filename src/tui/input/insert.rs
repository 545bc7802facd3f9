use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::{App, Mode};

use super::*;

// ---------------------------------------------------------------------------
// New-task input

pub(super) fn handle_insert(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => submit_new_task(app),
        KeyCode::Esc | KeyCode::Tab | KeyCode::Down => app.mode = Mode::Navigate,
        _ => {
            edit_text(&mut app.new_task, key);
        }
    }
}

/// Add the input's text as a new task. Blank input is ignored; a duplicate
/// title opens the notice popup and keeps the text for correction.
pub(super) fn submit_new_task(app: &mut App) {
    let title = app.new_task.text().trim().to_string();
    if title.is_empty() {
        return;
    }
    if let Ok(id) = app.store.add(&title, &mut app.dialogs) {
        app.new_task.clear();
        app.sync_items();
        app.select(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::task_store::Notice;
    use crate::tui::test_helpers::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_enter_adds_trimmed_task() {
        let mut app = app_with(&[]);
        type_str(&mut app, "  Walk dog ");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(titles(&app), vec!["Walk dog"]);
        assert!(app.new_task.is_empty());
        assert_eq!(app.items.len(), 1);
        assert_eq!(app.mode, Mode::Insert);
    }

    #[test]
    fn test_blank_input_ignored() {
        let mut app = app_with(&[]);
        type_str(&mut app, "   ");
        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.store.is_empty());
        assert!(!app.dialogs.is_open());
    }

    #[test]
    fn test_duplicate_opens_notice_and_keeps_text() {
        let mut app = app_with(&["Buy milk"]);
        handle_key(&mut app, ch('a'));
        type_str(&mut app, "Buy milk");
        handle_key(&mut app, key(KeyCode::Enter));

        assert_eq!(app.store.len(), 1);
        assert_eq!(app.dialogs.notice, Some(Notice::duplicate_title()));
        assert_eq!(app.new_task.text(), "Buy milk");

        // Any key dismisses the notice without reaching the input
        handle_key(&mut app, ch('z'));
        assert!(app.dialogs.notice.is_none());
        assert_eq!(app.new_task.text(), "Buy milk");
    }

    #[test]
    fn test_cursor_follows_new_task() {
        let mut app = app_with(&["a", "b"]);
        handle_key(&mut app, ch('a'));
        type_str(&mut app, "c");
        handle_key(&mut app, key(KeyCode::Enter));
        assert_eq!(app.cursor, 2);
        assert_eq!(app.items[2].task().title, "c");
    }
}
