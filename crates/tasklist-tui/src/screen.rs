//! Screen controller: the task store, command dispatch, and view state.
//!
//! `TaskScreen` is the single state object the application owns and hands to
//! rendering by reference. Remote calls are split-phase: an operation records
//! the request on the store and sends it to the backend, and the matching
//! completion comes back later through [`TaskScreen::apply`].
//!
//! Every successful mutation is followed by a full re-fetch instead of a local
//! patch. This costs a round trip per command but means the list only ever
//! shows what the remote service last returned.

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use tasklist_core::{
    project, Command, CommandKind, EditSession, Failure, Filter, NoticeKind, Notifier, Task,
    TaskId, TaskRow,
};

use crate::event::{BackendCommand, UiEvent};
use crate::store::TaskStore;

const BACKEND_GONE: &str = "backend is not running";

/// What caused an inline edit to be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTrigger {
    /// The commit key was pressed while editing.
    CommitKey,
    /// The draft field lost focus.
    FocusLost,
}

/// State and command dispatcher for the task list screen.
pub struct TaskScreen<N: Notifier> {
    store: TaskStore,

    /// Text of the add-task field.
    input: String,

    edit: Option<EditSession>,
    filter: Filter,

    /// Cleared by `shutdown`; completions arriving afterwards are dropped.
    active: bool,

    last_failure: Option<Failure>,
    notifier: N,
    cmd_tx: mpsc::UnboundedSender<BackendCommand>,
}

impl<N: Notifier> TaskScreen<N> {
    pub fn new(cmd_tx: mpsc::UnboundedSender<BackendCommand>, notifier: N) -> Self {
        Self {
            store: TaskStore::new(),
            input: String::new(),
            edit: None,
            filter: Filter::default(),
            active: true,
            last_failure: None,
            notifier,
            cmd_tx,
        }
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.tasks()
    }

    pub fn is_loading(&self) -> bool {
        self.store.is_loading()
    }

    #[cfg(test)]
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    #[cfg(test)]
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn push_input(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_input(&mut self) {
        self.input.pop();
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit.as_ref()
    }

    /// Most recent failure, until the next successful fetch.
    pub fn last_failure(&self) -> Option<&Failure> {
        self.last_failure.as_ref()
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    /// Rows to render: the collection under the active filter with the edit
    /// session applied.
    pub fn rows(&self) -> Vec<TaskRow<'_>> {
        project(self.store.tasks(), self.filter, self.edit.as_ref())
    }

    /// Re-fetch the whole collection.
    pub fn refresh(&mut self) {
        if !self.submit(BackendCommand::Refresh) {
            self.report(Failure::fetch(BACKEND_GONE));
        }
    }

    /// Create a task from the add field. Blank input is ignored.
    pub fn add(&mut self) {
        let title = self.input.trim();
        if title.is_empty() {
            debug!("Ignoring add with blank input");
            return;
        }
        let command = Command::Add {
            title: title.to_string(),
        };
        self.dispatch(command);
    }

    /// Flip a task's completion flag.
    pub fn toggle(&mut self, id: &TaskId) {
        let Some(task) = self.store.get(id) else {
            debug!(task_id = %id, "Ignoring toggle of unknown task");
            return;
        };
        let command = Command::Toggle {
            id: task.id.clone(),
            completed: !task.completed,
        };
        self.dispatch(command);
    }

    pub fn delete(&mut self, id: &TaskId) {
        if !self.store.contains(id) {
            debug!(task_id = %id, "Ignoring delete of unknown task");
            return;
        }
        self.dispatch(Command::Delete { id: id.clone() });
    }

    /// Open an edit session on a task, seeded with its title.
    ///
    /// An open session on another task is committed first, as if its field had
    /// lost focus.
    pub fn begin_edit(&mut self, id: &TaskId) {
        if self.edit.as_ref().is_some_and(|session| session.is_for(id)) {
            return;
        }
        if self.edit.is_some() {
            self.commit_edit(EditTrigger::FocusLost);
        }
        let Some(task) = self.store.get(id) else {
            debug!(task_id = %id, "Ignoring edit of unknown task");
            return;
        };
        self.edit = Some(EditSession::new(task.id.clone(), task.title.clone()));
    }

    /// Draft of the open session, unless it is already submitted.
    pub fn draft_mut(&mut self) -> Option<&mut String> {
        self.edit
            .as_mut()
            .filter(|session| !session.submitting)
            .map(|session| &mut session.draft)
    }

    pub fn cancel_edit(&mut self) {
        if let Some(session) = self.edit.take() {
            debug!(task_id = %session.task_id, "Edit cancelled");
        }
    }

    /// Submit the open edit session.
    ///
    /// Both triggers land here. A session is submitted at most once; later
    /// commits for the same session are ignored. A blank draft cancels the
    /// session without a remote call.
    pub fn commit_edit(&mut self, trigger: EditTrigger) {
        let Some(session) = self.edit.as_mut() else {
            debug!(?trigger, "No edit session to commit");
            return;
        };
        if session.submitting {
            debug!(?trigger, task_id = %session.task_id, "Edit already submitted");
            return;
        }
        if !self.store.contains(&session.task_id) {
            debug!(task_id = %session.task_id, "Edited task is gone, dropping session");
            self.edit = None;
            return;
        }
        let Some(title) = session.committed_title().map(str::to_string) else {
            debug!(task_id = %session.task_id, "Blank draft, cancelling edit");
            self.edit = None;
            return;
        };

        session.submitting = true;
        let command = Command::Edit {
            id: session.task_id.clone(),
            title,
        };
        debug!(?trigger, "Committing edit");
        if !self.dispatch(command) {
            if let Some(session) = self.edit.as_mut() {
                session.submitting = false;
            }
        }
    }

    /// Apply a completion from the backend.
    pub fn apply(&mut self, event: UiEvent) {
        if !self.active {
            debug!(?event, "Dropping completion after shutdown");
            return;
        }
        self.store.finish_request();

        match event {
            UiEvent::TasksLoaded(tasks) => {
                debug!(count = tasks.len(), "Tasks loaded");
                self.store.replace(tasks);
                self.last_failure = None;
                self.clear_stale_edit();
            }
            UiEvent::FetchFailed(reason) => {
                self.report(Failure::fetch(reason));
            }
            UiEvent::CommandSucceeded(command) => {
                info!(command = %command.kind(), "Command succeeded");
                match &command {
                    Command::Add { .. } => self.input.clear(),
                    Command::Edit { id, title } => {
                        if self.submitted_edit_mut(id, title).is_some() {
                            self.edit = None;
                        }
                    }
                    Command::Delete { id } => self.clear_edit_for(id),
                    Command::Toggle { .. } => {}
                }
                self.notifier
                    .notify(NoticeKind::Success, &command.success_message());
                self.refresh();
            }
            UiEvent::CommandFailed { command, reason } => {
                if let Command::Edit { id, title } = &command {
                    if let Some(session) = self.submitted_edit_mut(id, title) {
                        session.submitting = false;
                    }
                }
                self.report(Failure::command(command.kind(), reason));
            }
        }
    }

    /// Stop the screen. Late completions are ignored from here on.
    pub fn shutdown(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        let _ = self.cmd_tx.send(BackendCommand::Quit);
        info!("Task screen shut down");
    }

    /// Send a command to the backend. Returns false if it could not be sent.
    fn dispatch(&mut self, command: Command) -> bool {
        let kind: CommandKind = command.kind();
        debug!(?command, "Dispatching command");
        if self.submit(BackendCommand::Execute(command)) {
            true
        } else {
            self.report(Failure::command(kind, BACKEND_GONE));
            false
        }
    }

    fn submit(&mut self, cmd: BackendCommand) -> bool {
        if !self.active {
            debug!(?cmd, "Screen is shut down, not submitting");
            return false;
        }
        self.store.begin_request();
        if self.cmd_tx.send(cmd).is_err() {
            warn!("Backend channel closed");
            self.store.finish_request();
            return false;
        }
        true
    }

    fn report(&mut self, failure: Failure) {
        if !self.active {
            return;
        }
        warn!(%failure, "Operation failed");
        self.notifier.notify(NoticeKind::Error, &failure.to_string());
        self.last_failure = Some(failure);
    }

    /// The open session, only if it is the one that submitted this update. A
    /// session reopened after the commit holds a newer draft.
    fn submitted_edit_mut(&mut self, id: &TaskId, title: &str) -> Option<&mut EditSession> {
        self.edit.as_mut().filter(|session| session.awaits(id, title))
    }

    fn clear_edit_for(&mut self, id: &TaskId) {
        if self.edit.as_ref().is_some_and(|session| session.is_for(id)) {
            self.edit = None;
        }
    }

    fn clear_stale_edit(&mut self) {
        let stale = self
            .edit
            .as_ref()
            .is_some_and(|session| !self.store.contains(&session.task_id));
        if stale {
            debug!("Edited task no longer exists, clearing session");
            self.edit = None;
        }
    }
}
