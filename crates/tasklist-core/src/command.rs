//! Mutations the screen can issue against the remote service.

use std::fmt;

use crate::{NewTask, TaskId, TaskPatch};

/// A user action translated into a remote mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a task with the given (already trimmed) title.
    Add { title: String },

    /// Set the completion flag to `completed` (the new value, not the old one).
    Toggle { id: TaskId, completed: bool },

    /// Retitle a task.
    Edit { id: TaskId, title: String },

    /// Remove a task.
    Delete { id: TaskId },
}

/// A command lowered to one call against the `/tasks` resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request<'a> {
    /// `POST /tasks`
    Create(NewTask),
    /// `PUT /tasks/{id}`
    Update(&'a TaskId, TaskPatch),
    /// `DELETE /tasks/{id}`
    Delete(&'a TaskId),
}

/// Payload-free name of a command, used in failure reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Add,
    Toggle,
    Edit,
    Delete,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Add { .. } => CommandKind::Add,
            Command::Toggle { .. } => CommandKind::Toggle,
            Command::Edit { .. } => CommandKind::Edit,
            Command::Delete { .. } => CommandKind::Delete,
        }
    }

    /// The REST call that carries out this command.
    pub fn request(&self) -> Request<'_> {
        match self {
            Command::Add { title } => Request::Create(NewTask::new(title.clone())),
            Command::Toggle { id, completed } => {
                Request::Update(id, TaskPatch::completed(*completed))
            }
            Command::Edit { id, title } => Request::Update(id, TaskPatch::title(title.clone())),
            Command::Delete { id } => Request::Delete(id),
        }
    }

    /// Short user-facing confirmation.
    pub fn success_message(&self) -> String {
        match self {
            Command::Add { title } => format!("Added \"{}\"", title),
            Command::Toggle {
                completed: true, ..
            } => "Task completed".to_string(),
            Command::Toggle {
                completed: false, ..
            } => "Task reopened".to_string(),
            Command::Edit { .. } => "Task updated".to_string(),
            Command::Delete { .. } => "Task deleted".to_string(),
        }
    }
}

impl CommandKind {
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Add => "add",
            CommandKind::Toggle => "toggle",
            CommandKind::Edit => "edit",
            CommandKind::Delete => "delete",
        }
    }
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_patch_carries_new_value() {
        let id = TaskId::new("7");
        let cmd = Command::Toggle {
            id: id.clone(),
            completed: true,
        };
        assert_eq!(cmd.request(), Request::Update(&id, TaskPatch::completed(true)));
    }

    #[test]
    fn test_edit_and_delete_address_the_task() {
        let id = TaskId::new("3");
        let edit = Command::Edit {
            id: id.clone(),
            title: "renamed".to_string(),
        };
        assert_eq!(edit.request(), Request::Update(&id, TaskPatch::title("renamed")));
        assert_eq!(edit.kind(), CommandKind::Edit);

        let delete = Command::Delete { id: id.clone() };
        assert_eq!(delete.request(), Request::Delete(&id));
    }

    #[test]
    fn test_add_creates_with_title() {
        let cmd = Command::Add {
            title: "b".to_string(),
        };
        assert_eq!(cmd.kind(), CommandKind::Add);
        assert_eq!(cmd.request(), Request::Create(NewTask::new("b")));
        assert_eq!(cmd.success_message(), "Added \"b\"");
    }
}
