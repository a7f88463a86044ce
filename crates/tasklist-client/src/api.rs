//! The remote task service contract.

use async_trait::async_trait;
use tasklist_core::{NewTask, Task, TaskId, TaskPatch};

use crate::error::ClientError;

/// List/create/update/delete over the remote task collection.
///
/// Mutations deliberately return nothing: the screen never patches its local
/// copy from a mutation response, it re-fetches the whole collection instead.
#[async_trait]
pub trait TaskApi: Send + Sync {
    /// Fetch the full, ordered task collection.
    async fn list(&self) -> Result<Vec<Task>, ClientError>;

    /// Create a task. The service assigns the id and sets `completed = false`.
    async fn create(&self, task: &NewTask) -> Result<(), ClientError>;

    /// Apply a partial update to one task.
    async fn update(&self, id: &TaskId, patch: &TaskPatch) -> Result<(), ClientError>;

    /// Remove a task.
    async fn delete(&self, id: &TaskId) -> Result<(), ClientError>;
}
