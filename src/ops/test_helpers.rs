//! Deterministic stand-ins for the task list collaborators.

use crate::model::task::TaskId;

use super::task_item::TaskActions;
use super::task_store::{Clock, ConfirmPrompt, Notice, Notifier, PendingRemoval, Prompt};

/// Clock frozen at a given millisecond
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub notices: Vec<Notice>,
}

impl Notifier for RecordingNotifier {
    fn notify(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

/// Keeps every prompt and pending removal so the test can answer later
#[derive(Default)]
pub struct RecordingPrompt {
    pub prompts: Vec<Prompt>,
    pub pending: Vec<PendingRemoval>,
}

impl ConfirmPrompt for RecordingPrompt {
    fn ask(&mut self, prompt: Prompt, pending: PendingRemoval) {
        self.prompts.push(prompt);
        self.pending.push(pending);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionCall {
    Toggle(TaskId),
    Remove(TaskId),
    Edit(TaskId, String),
}

/// Records calls made by an item controller
#[derive(Default)]
pub struct RecordingActions {
    pub calls: Vec<ActionCall>,
}

impl TaskActions for RecordingActions {
    fn toggle(&mut self, id: TaskId) {
        self.calls.push(ActionCall::Toggle(id));
    }

    fn remove(&mut self, id: TaskId) {
        self.calls.push(ActionCall::Remove(id));
    }

    fn edit(&mut self, id: TaskId, title: &str) {
        self.calls.push(ActionCall::Edit(id, title.to_string()));
    }
}
