//! Projection of the task collection into rendered rows.
//!
//! Everything here is recomputed from the collection on each call; nothing is
//! cached, so the rows can never drift from the store.

use crate::{EditSession, Filter, Task};

/// One row of the rendered list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskRow<'a> {
    pub task: &'a Task,

    /// Draft title when this row is the one being edited.
    pub draft: Option<&'a str>,
}

impl TaskRow<'_> {
    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }
}

/// Tasks visible under `filter`, in collection order.
pub fn visible_tasks(tasks: &[Task], filter: Filter) -> impl Iterator<Item = &Task> {
    tasks.iter().filter(move |task| filter.matches(task))
}

/// Visible rows with the edit session applied.
pub fn project<'a>(
    tasks: &'a [Task],
    filter: Filter,
    edit: Option<&'a EditSession>,
) -> Vec<TaskRow<'a>> {
    visible_tasks(tasks, filter)
        .map(|task| TaskRow {
            task,
            draft: edit
                .filter(|session| session.is_for(&task.id))
                .map(|session| session.draft.as_str()),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaskId;

    fn sample() -> Vec<Task> {
        vec![
            Task::new("1", "a", false),
            Task::new("2", "b", true),
            Task::new("3", "c", false),
            Task::new("4", "d", true),
        ]
    }

    /// Every completion pattern of every collection up to `max_len` tasks,
    /// so empty, all-done, none-done and mixed collections are all covered.
    fn collections(max_len: usize) -> Vec<Vec<Task>> {
        let mut out = Vec::new();
        for len in 0..=max_len {
            for mask in 0u32..(1 << len) {
                let tasks = (0..len)
                    .map(|i| {
                        let id = (i + 1).to_string();
                        Task::new(id.as_str(), format!("task {i}"), mask & (1 << i) != 0)
                    })
                    .collect();
                out.push(tasks);
            }
        }
        out
    }

    #[test]
    fn test_completed_filter_is_subset_of_done_tasks() {
        let visible: Vec<_> = visible_tasks(&sample(), Filter::Completed)
            .map(|t| t.id.as_str().to_string())
            .collect();
        assert_eq!(visible, vec!["2", "4"]);

        for tasks in collections(5) {
            let done = tasks.iter().filter(|t| t.completed).count();
            let visible: Vec<_> = visible_tasks(&tasks, Filter::Completed).collect();

            assert_eq!(visible.len(), done);
            for task in visible {
                assert!(task.completed);
                assert!(tasks.contains(task));
            }
        }
    }

    #[test]
    fn test_all_is_identity_and_keeps_order() {
        let tasks = sample();
        let ids: Vec<_> = visible_tasks(&tasks, Filter::All)
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn test_pending_and_completed_partition_collection() {
        for tasks in collections(5) {
            let pending: Vec<_> = visible_tasks(&tasks, Filter::Pending).collect();
            let completed: Vec<_> = visible_tasks(&tasks, Filter::Completed).collect();

            assert_eq!(pending.len() + completed.len(), tasks.len());
            assert!(pending.iter().all(|t| !completed.contains(t)));
            let all: Vec<_> = visible_tasks(&tasks, Filter::All).collect();
            assert_eq!(all, tasks.iter().collect::<Vec<_>>());
        }
    }

    #[test]
    fn test_only_edited_row_carries_draft() {
        let tasks = sample();
        let mut session = EditSession::new(TaskId::new("3"), "c");
        session.draft.push_str(" and more");

        let rows = project(&tasks, Filter::All, Some(&session));
        let editing: Vec<_> = rows.iter().filter(|r| r.is_editing()).collect();

        assert_eq!(editing.len(), 1);
        assert_eq!(editing[0].task.id.as_str(), "3");
        assert_eq!(editing[0].draft, Some("c and more"));
    }

    #[test]
    fn test_edited_row_hidden_by_filter_is_not_rendered() {
        let tasks = sample();
        let session = EditSession::new(TaskId::new("2"), "b");
        let rows = project(&tasks, Filter::Pending, Some(&session));
        assert!(rows.iter().all(|r| !r.is_editing()));
    }

    #[test]
    fn test_empty_collection() {
        assert!(project(&[], Filter::Completed, None).is_empty());
    }
}
