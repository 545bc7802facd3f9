use tracing::debug;

use crate::model::task::{Task, TaskId};
use crate::util::text_input::TextInput;

use super::task_store::{ConfirmPrompt, TaskStore};

/// Capabilities an item needs from whoever owns the task list
pub trait TaskActions {
    fn toggle(&mut self, id: TaskId);
    fn remove(&mut self, id: TaskId);
    fn edit(&mut self, id: TaskId, title: &str);
}

/// [`TaskActions`] backed by a [`TaskStore`], with removals routed through `prompt`
pub struct StoreActions<'a> {
    pub store: &'a mut TaskStore,
    pub prompt: &'a mut dyn ConfirmPrompt,
}

impl TaskActions for StoreActions<'_> {
    fn toggle(&mut self, id: TaskId) {
        self.store.toggle_done(id);
    }

    fn remove(&mut self, id: TaskId) {
        self.store.remove(id, self.prompt);
    }

    fn edit(&mut self, id: TaskId, title: &str) {
        self.store.edit(id, title);
    }
}

/// Inline edit state of a single item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemMode {
    Viewing,
    Editing,
}

/// Per-task view state: the bound task, the edit mode and the draft title.
///
/// The draft is what the title field shows. It is synced from the task only
/// when editing starts and on cancel; a submitted draft is kept as is.
#[derive(Debug, Clone)]
pub struct TaskItemController {
    task: Task,
    mode: ItemMode,
    draft: TextInput,
}

impl TaskItemController {
    pub fn new(task: Task) -> Self {
        let draft = TextInput::with_text(&task.title);
        TaskItemController {
            task,
            mode: ItemMode::Viewing,
            draft,
        }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn id(&self) -> TaskId {
        self.task.id
    }

    pub fn mode(&self) -> ItemMode {
        self.mode
    }

    pub fn is_editing(&self) -> bool {
        self.mode == ItemMode::Editing
    }

    /// The title field holds input focus exactly while editing
    pub fn has_focus(&self) -> bool {
        self.is_editing()
    }

    pub fn draft(&self) -> &str {
        self.draft.text()
    }

    pub fn draft_input(&self) -> &TextInput {
        &self.draft
    }

    /// The draft buffer, writable only while editing
    pub fn draft_mut(&mut self) -> Option<&mut TextInput> {
        match self.mode {
            ItemMode::Editing => Some(&mut self.draft),
            ItemMode::Viewing => None,
        }
    }

    /// Follow the latest record for this task. The draft is left alone.
    pub fn bind(&mut self, task: &Task) {
        debug_assert_eq!(task.id, self.task.id);
        self.task = task.clone();
    }

    /// Viewing → Editing. The draft restarts from the task's current title.
    pub fn start_edit(&mut self) -> bool {
        if self.mode == ItemMode::Editing {
            return false;
        }
        self.draft.set(&self.task.title);
        self.mode = ItemMode::Editing;
        debug!(id = %self.task.id, "start editing");
        true
    }

    /// Editing → Viewing, dropping unsaved keystrokes
    pub fn cancel(&mut self) -> bool {
        if self.mode == ItemMode::Viewing {
            return false;
        }
        self.draft.set(&self.task.title);
        self.mode = ItemMode::Viewing;
        debug!(id = %self.task.id, "edit cancelled");
        true
    }

    /// Editing → Viewing, committing the draft through `actions`
    pub fn submit(&mut self, actions: &mut dyn TaskActions) -> bool {
        if self.mode == ItemMode::Viewing {
            return false;
        }
        actions.edit(self.task.id, self.draft.text());
        self.mode = ItemMode::Viewing;
        debug!(id = %self.task.id, "edit submitted");
        true
    }

    /// Toggle completion; available in either mode
    pub fn toggle(&self, actions: &mut dyn TaskActions) {
        actions.toggle(self.task.id);
    }

    /// Request removal. Inert while editing; returns whether the request went out.
    pub fn remove(&self, actions: &mut dyn TaskActions) -> bool {
        if self.is_editing() {
            return false;
        }
        actions.remove(self.task.id);
        true
    }
}
