//! Inline edit session.

use crate::TaskId;

/// The task currently being retitled and its draft value.
///
/// At most one session exists at a time. Once committed, the session is
/// `submitting` until the update completes; further commits are ignored so
/// that the focus-lost and commit-key paths never both submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    pub task_id: TaskId,
    pub draft: String,
    pub submitting: bool,
}

impl EditSession {
    /// Start editing a task, seeding the draft with its current title.
    pub fn new(task_id: TaskId, title: impl Into<String>) -> Self {
        Self {
            task_id,
            draft: title.into(),
            submitting: false,
        }
    }

    /// Returns true if this session targets the given task.
    pub fn is_for(&self, task_id: &TaskId) -> bool {
        &self.task_id == task_id
    }

    /// Returns true if this session is waiting on the update that set
    /// `task_id` to `title`.
    pub fn awaits(&self, task_id: &TaskId, title: &str) -> bool {
        self.submitting && self.is_for(task_id) && self.committed_title() == Some(title)
    }

    /// The draft as it would be submitted, or None if it is blank.
    pub fn committed_title(&self) -> Option<&str> {
        let title = self.draft.trim();
        (!title.is_empty()).then_some(title)
    }
}
