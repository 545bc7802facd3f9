use crate::ops::task_store::{ConfirmPrompt, Notice, Notifier, PendingRemoval, Prompt};

/// An open confirmation popup and the removal waiting on it
#[derive(Debug)]
pub struct ConfirmState {
    pub prompt: Prompt,
    pub pending: PendingRemoval,
}

/// Popup slots. The store talks to these through [`Notifier`] and [`ConfirmPrompt`];
/// input handling answers them on a later key press.
#[derive(Debug, Default)]
pub struct Dialogs {
    pub confirm: Option<ConfirmState>,
    pub notice: Option<Notice>,
}

impl Dialogs {
    pub fn is_open(&self) -> bool {
        self.confirm.is_some() || self.notice.is_some()
    }
}

impl Notifier for Dialogs {
    fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }
}

impl ConfirmPrompt for Dialogs {
    fn ask(&mut self, prompt: Prompt, pending: PendingRemoval) {
        // An unanswered prompt being replaced counts as declined
        self.confirm = Some(ConfirmState { prompt, pending });
    }
}
