//! User-facing failure taxonomy.

use thiserror::Error;

use crate::CommandKind;

/// Failures the screen recovers from locally and reports to the user.
///
/// Neither is fatal and neither is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Failure {
    /// The task collection could not be retrieved.
    #[error("Failed to load tasks: {reason}")]
    FetchFailed { reason: String },

    /// A create/update/delete was rejected or the service was unreachable.
    #[error("Failed to {command} task: {reason}")]
    CommandFailed { command: CommandKind, reason: String },
}

impl Failure {
    pub fn fetch(reason: impl Into<String>) -> Self {
        Self::FetchFailed {
            reason: reason.into(),
        }
    }

    pub fn command(command: CommandKind, reason: impl Into<String>) -> Self {
        Self::CommandFailed {
            command,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_operation() {
        let failure = Failure::command(CommandKind::Delete, "HTTP 500");
        assert_eq!(failure.to_string(), "Failed to delete task: HTTP 500");

        let failure = Failure::fetch("connection refused");
        assert_eq!(failure.to_string(), "Failed to load tasks: connection refused");
    }
}
