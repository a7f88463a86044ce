//! Local copy of the remote task collection.

use tasklist_core::{Task, TaskId};

/// Authoritative local copy of the task collection plus the loading state.
///
/// The collection is only ever replaced wholesale from a successful fetch;
/// mutations never patch it.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
    outstanding: usize,
    loaded: bool,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| &task.id == id)
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.get(id).is_some()
    }

    /// True while any remote call is outstanding.
    pub fn is_loading(&self) -> bool {
        self.outstanding > 0
    }

    /// Number of remote calls issued but not yet completed.
    #[cfg(test)]
    pub fn outstanding(&self) -> usize {
        self.outstanding
    }

    /// True once a fetch has succeeded at least once.
    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    /// Record that a remote call was issued.
    pub fn begin_request(&mut self) {
        self.outstanding += 1;
    }

    /// Record that a remote call completed, successfully or not.
    pub fn finish_request(&mut self) {
        self.outstanding = self.outstanding.saturating_sub(1);
    }

    /// Replace the collection with a freshly fetched one.
    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        self.loaded = true;
    }

    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }
}
