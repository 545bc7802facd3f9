mod common;
mod confirm;
mod edit;
mod insert;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

// Import all submodule functions into this module's namespace
// so that submodules can access cross-module functions via `use super::*;`
#[allow(unused_imports)]
use common::*;
#[allow(unused_imports)]
use confirm::*;
#[allow(unused_imports)]
use edit::*;
#[allow(unused_imports)]
use insert::*;
#[allow(unused_imports)]
use navigate::*;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }

    // Ctrl-C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    app.status_message = None;

    // Popups intercept all input
    if app.dialogs.notice.is_some() {
        dismiss_notice(app);
        return;
    }
    if app.dialogs.confirm.is_some() {
        handle_confirm(app, key);
        return;
    }

    let key = normalize_key(key);
    match app.mode {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Insert => handle_insert(app, key),
        Mode::Edit => handle_edit(app, key),
    }
}

/// Handle a bracketed paste event (terminal sends pasted text as a single string).
/// Goes to whichever text field has focus; ignored otherwise.
pub fn handle_paste(app: &mut App, text: &str) {
    if text.is_empty() || app.dialogs.is_open() {
        return;
    }
    match app.mode {
        Mode::Insert => app.new_task.insert_str(text),
        Mode::Edit => {
            if let Some(draft) = app.cursor_item_mut().and_then(|i| i.draft_mut()) {
                draft.insert_str(text);
            }
        }
        Mode::Navigate => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_helpers::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ctrl_c_quits_from_any_mode() {
        let mut app = app_with(&[]);
        assert_eq!(app.mode, Mode::Insert);
        handle_key(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[test]
    fn test_paste_into_insert_and_edit() {
        let mut app = app_with(&["a"]);
        handle_key(&mut app, ch('a'));
        handle_paste(&mut app, "Walk\ndog");
        assert_eq!(app.new_task.text(), "Walk dog");

        handle_key(&mut app, key(KeyCode::Esc));
        handle_key(&mut app, ch('e'));
        handle_paste(&mut app, "bc");
        assert_eq!(app.items[0].draft(), "abc");
    }

    #[test]
    fn test_paste_ignored_while_navigating() {
        let mut app = app_with(&["a"]);
        handle_paste(&mut app, "zzz");
        assert!(app.new_task.is_empty());
        assert_eq!(app.items[0].draft(), "a");
    }
}
