//! Task List Core Domain Types
//!
//! This crate contains pure domain types with no dependencies on:
//! - Network/HTTP
//! - Async runtimes
//! - Terminal rendering
//!
//! Everything the task list screen derives its state from lives here: the
//! remote-owned `Task`, the mutation `Command`s the screen can issue, the
//! view-level `Filter` and `EditSession`, and the projection that turns them
//! into rendered rows.

pub mod command;
pub mod edit;
pub mod error;
pub mod filter;
pub mod ids;
pub mod notice;
pub mod task;
pub mod view;

// Re-export commonly used types
pub use command::{Command, CommandKind, Request};
pub use edit::EditSession;
pub use error::Failure;
pub use filter::Filter;
pub use ids::TaskId;
pub use notice::{NoticeKind, Notifier};
pub use task::{NewTask, Task, TaskPatch};
pub use view::{project, visible_tasks, TaskRow};
