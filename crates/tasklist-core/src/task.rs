//! Task type and the request bodies used to create and update tasks.

use crate::TaskId;
use serde::{Deserialize, Serialize};

/// A titled, completable unit of work persisted by the remote service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Server-assigned identifier.
    pub id: TaskId,

    /// Task title.
    pub title: String,

    /// Whether the task is done.
    #[serde(default)]
    pub completed: bool,
}

impl Task {
    /// Create a Task as the remote service would return it.
    pub fn new(id: impl Into<TaskId>, title: impl Into<String>, completed: bool) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            completed,
        }
    }
}

/// Body of a create request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Partial update. Only the fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
}

impl TaskPatch {
    /// Patch that only changes the title.
    pub fn title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            completed: None,
        }
    }

    /// Patch that only changes the completion flag.
    pub fn completed(completed: bool) -> Self {
        Self {
            title: None,
            completed: Some(completed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_task_from_wire() {
        let task: Task =
            serde_json::from_value(json!({"id": 1, "title": "a", "completed": false})).unwrap();
        assert_eq!(task, Task::new("1", "a", false));
    }

    #[test]
    fn test_missing_completed_defaults_to_false() {
        let task: Task = serde_json::from_value(json!({"id": "x", "title": "a"})).unwrap();
        assert!(!task.completed);
    }

    #[test]
    fn test_patch_omits_unset_fields() {
        let body = serde_json::to_value(TaskPatch::completed(true)).unwrap();
        assert_eq!(body, json!({"completed": true}));

        let body = serde_json::to_value(TaskPatch::title("renamed")).unwrap();
        assert_eq!(body, json!({"title": "renamed"}));
    }
}
