use std::fmt;

/// Identifier of a task, taken from the clock (milliseconds) when the task is added
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single to-do record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: TaskId,
    /// Task title text
    pub title: String,
    /// Completion flag
    pub done: bool,
}

impl Task {
    /// Create a new, not yet done task
    pub fn new(id: TaskId, title: impl Into<String>) -> Self {
        Task {
            id,
            title: title.into(),
            done: false,
        }
    }

    /// Copy of this task with a replaced title
    pub fn with_title(&self, title: &str) -> Self {
        Task {
            title: title.to_string(),
            ..self.clone()
        }
    }

    /// Copy of this task with the done flag flipped
    pub fn toggled(&self) -> Self {
        Task {
            done: !self.done,
            ..self.clone()
        }
    }

    /// The character used inside the checkbox `[ ]`
    pub fn checkbox_char(&self) -> char {
        if self.done { 'x' } else { ' ' }
    }
}
