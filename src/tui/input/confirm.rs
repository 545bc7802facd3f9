use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::task_item::StoreActions;
use crate::ops::task_store::Choice;
use crate::tui::app::App;

/// Ask to remove the task under the cursor; the confirm popup takes over from here
pub(super) fn remove_cursor_task(app: &mut App) {
    let Some(item) = app.items.get(app.cursor) else {
        return;
    };
    let mut actions = StoreActions {
        store: &mut app.store,
        prompt: &mut app.dialogs,
    };
    item.remove(&mut actions);
}

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    let choice = match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') => Choice::Affirm,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Choice::Decline,
        _ => return,
    };
    let Some(state) = app.dialogs.confirm.take() else {
        return;
    };
    let title = app
        .store
        .get(state.pending.id())
        .map(|t| t.title.clone())
        .unwrap_or_default();
    if app.store.resolve_removal(state.pending, choice) {
        app.status_message = Some(format!("removed \"{}\"", title));
        app.sync_items();
    }
}

pub(super) fn dismiss_notice(app: &mut App) {
    app.dialogs.notice = None;
}
