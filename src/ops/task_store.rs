use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::model::task::{Task, TaskId};

/// Error type for task list operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskError {
    #[error("task already registered: {0}")]
    DuplicateTitle(String),
}

// ---------------------------------------------------------------------------
// Collaborators
// ---------------------------------------------------------------------------

/// Informational message shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn duplicate_title() -> Self {
        Notice {
            title: "Task already registered".into(),
            message: "You cannot register a task with the same name".into(),
        }
    }
}

/// A yes/no question put to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub title: String,
    pub message: String,
    pub decline_label: String,
    pub affirm_label: String,
}

impl Prompt {
    pub fn remove_task() -> Self {
        Prompt {
            title: "Remove item".into(),
            message: "Are you sure you want to remove this item?".into(),
            decline_label: "No".into(),
            affirm_label: "Yes".into(),
        }
    }
}

/// The user's answer to a [`Prompt`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    Affirm,
    Decline,
}

/// A removal waiting on the user's answer. Hand it back to
/// [`TaskStore::resolve_removal`] once the prompt is answered.
#[derive(Debug, PartialEq, Eq)]
#[must_use = "a pending removal does nothing until it is resolved"]
pub struct PendingRemoval {
    id: TaskId,
}

impl PendingRemoval {
    pub fn id(&self) -> TaskId {
        self.id
    }
}

/// Shows informational notices (no answer expected)
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Presents a binary confirmation prompt. The answer arrives later, through
/// [`TaskStore::resolve_removal`] with the `pending` token.
pub trait ConfirmPrompt {
    fn ask(&mut self, prompt: Prompt, pending: PendingRemoval);
}

/// Millisecond time source used for task ids
pub trait Clock {
    fn now_millis(&self) -> i64;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

// ---------------------------------------------------------------------------
// TaskStore
// ---------------------------------------------------------------------------

/// Owns the ordered task list. Every change replaces the whole snapshot;
/// a no-op leaves the current snapshot in place.
pub struct TaskStore {
    tasks: Arc<[Task]>,
    clock: Box<dyn Clock>,
    last_id: Option<i64>,
    revision: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl TaskStore {
    pub fn new(clock: impl Clock + 'static) -> Self {
        TaskStore {
            tasks: Arc::from(Vec::new()),
            clock: Box::new(clock),
            last_id: None,
            revision: 0,
        }
    }

    /// Store pre-filled with `tasks`, in order. Later ids stay above the largest one given.
    pub fn with_tasks(clock: impl Clock + 'static, tasks: Vec<Task>) -> Self {
        let last_id = tasks.iter().map(|t| t.id.0).max();
        TaskStore {
            tasks: Arc::from(tasks),
            clock: Box::new(clock),
            last_id,
            revision: 0,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Shared handle to the current snapshot
    pub fn snapshot(&self) -> Arc<[Task]> {
        Arc::clone(&self.tasks)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Bumped on every committed change
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Append a task with `title`, unless a task with the exact same title exists.
    /// Duplicates are reported through `notifier` and leave the list untouched.
    pub fn add(&mut self, title: &str, notifier: &mut dyn Notifier) -> Result<TaskId, TaskError> {
        if self.tasks.iter().any(|t| t.title == title) {
            warn!(title, "rejected duplicate task title");
            notifier.notify(Notice::duplicate_title());
            return Err(TaskError::DuplicateTitle(title.to_string()));
        }

        let id = self.next_id();
        let next: Arc<[Task]> = self
            .tasks
            .iter()
            .cloned()
            .chain(std::iter::once(Task::new(id, title)))
            .collect();
        self.commit(next);
        info!(%id, title, "task added");
        Ok(id)
    }

    /// Replace the title of task `id`. Neither emptiness nor uniqueness is checked.
    /// Returns false (and changes nothing) if no task has that id.
    pub fn edit(&mut self, id: TaskId, new_title: &str) -> bool {
        self.replace_matching(id, |task| task.with_title(new_title))
    }

    /// Flip the done flag of task `id`. Returns false if no task has that id.
    pub fn toggle_done(&mut self, id: TaskId) -> bool {
        self.replace_matching(id, Task::toggled)
    }

    /// Ask for confirmation to remove task `id`. Nothing is removed until the
    /// pending removal is resolved with [`Choice::Affirm`].
    pub fn remove(&self, id: TaskId, prompt: &mut dyn ConfirmPrompt) {
        debug!(%id, "asking to confirm removal");
        prompt.ask(Prompt::remove_task(), PendingRemoval { id });
    }

    /// Complete (or drop) a removal started by [`TaskStore::remove`].
    /// Returns true if a task was removed.
    pub fn resolve_removal(&mut self, pending: PendingRemoval, choice: Choice) -> bool {
        let id = pending.id;
        if choice == Choice::Decline {
            debug!(%id, "removal declined");
            return false;
        }
        if self.get(id).is_none() {
            debug!(%id, "removal confirmed for unknown task");
            return false;
        }
        let next: Arc<[Task]> = self.tasks.iter().filter(|t| t.id != id).cloned().collect();
        self.commit(next);
        info!(%id, "task removed");
        true
    }

    fn replace_matching(&mut self, id: TaskId, f: impl Fn(&Task) -> Task) -> bool {
        if self.get(id).is_none() {
            debug!(%id, "no task with this id");
            return false;
        }
        let next: Arc<[Task]> = self
            .tasks
            .iter()
            .map(|t| if t.id == id { f(t) } else { t.clone() })
            .collect();
        self.commit(next);
        true
    }

    fn commit(&mut self, next: Arc<[Task]>) {
        self.tasks = next;
        self.revision += 1;
    }

    /// Clock millis, bumped past the last id so two adds in the same millisecond
    /// still get distinct ids.
    fn next_id(&mut self) -> TaskId {
        let now = self.clock.now_millis();
        let id = match self.last_id {
            Some(last) if now <= last => last + 1,
            _ => now,
        };
        self.last_id = Some(id);
        TaskId(id)
    }
}
