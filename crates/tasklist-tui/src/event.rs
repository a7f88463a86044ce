//! Event types for communication between the backend task and the UI.

use tasklist_core::{Command, Task};

/// Completions sent from the backend to the UI thread.
///
/// Every `BackendCommand::Refresh` is answered by exactly one of
/// `TasksLoaded`/`FetchFailed`, every `BackendCommand::Execute` by exactly one
/// of `CommandSucceeded`/`CommandFailed`.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    /// The full collection was fetched.
    TasksLoaded(Vec<Task>),

    /// The collection could not be fetched.
    FetchFailed(String),

    /// A mutation was accepted by the remote service.
    CommandSucceeded(Command),

    /// A mutation was rejected or the service was unreachable.
    CommandFailed { command: Command, reason: String },
}

/// Requests sent from the UI to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum BackendCommand {
    /// Fetch the full task collection.
    Refresh,

    /// Run a mutation against the remote service.
    Execute(Command),

    /// Stop accepting requests.
    Quit,
}
