use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::task_item::StoreActions;
use crate::tui::app::{App, Mode};

use super::*;

/// Put the task under the cursor into inline edit mode
pub(super) fn enter_title_edit(app: &mut App) {
    let Some(item) = app.cursor_item_mut() else {
        return;
    };
    if item.start_edit() {
        app.mode = Mode::Edit;
    }
}

// ---------------------------------------------------------------------------
// EDIT mode input

pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Enter => confirm_edit(app),
        KeyCode::Esc => cancel_edit(app),
        KeyCode::Char('t') if ctrl => toggle_cursor_task(app),
        KeyCode::Char('d') if ctrl => {
            let removable = app.items.get(app.cursor).is_some_and(|item| {
                let mut actions = StoreActions {
                    store: &mut app.store,
                    prompt: &mut app.dialogs,
                };
                item.remove(&mut actions)
            });
            if !removable {
                app.status_message = Some("finish editing before removing".to_string());
            }
        }
        _ => {
            if let Some(draft) = app.cursor_item_mut().and_then(|i| i.draft_mut()) {
                edit_text(draft, key);
            }
        }
    }
}

/// Commit the draft through the store and leave edit mode
pub(super) fn confirm_edit(app: &mut App) {
    app.mode = Mode::Navigate;
    let Some(item) = app.items.get_mut(app.cursor) else {
        return;
    };
    let mut actions = StoreActions {
        store: &mut app.store,
        prompt: &mut app.dialogs,
    };
    item.submit(&mut actions);
    app.sync_items();
}

/// Leave edit mode, reverting the draft
pub(super) fn cancel_edit(app: &mut App) {
    app.mode = Mode::Navigate;
    if let Some(item) = app.cursor_item_mut() {
        item.cancel();
    }
}
