//! View-level task filter.

use std::fmt;

use crate::Task;

/// Which tasks the list shows. Pure view state, never sent to the remote service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Completed,
    Pending,
}

impl Filter {
    /// Filters in tab order.
    pub fn all() -> &'static [Filter] {
        &[Filter::All, Filter::Completed, Filter::Pending]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Completed => "Completed",
            Filter::Pending => "Pending",
        }
    }

    /// Returns true if the task is visible under this filter.
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Completed => task.completed,
            Filter::Pending => !task.completed,
        }
    }

    pub fn next(&self) -> Filter {
        match self {
            Filter::All => Filter::Completed,
            Filter::Completed => Filter::Pending,
            Filter::Pending => Filter::All,
        }
    }

    pub fn prev(&self) -> Filter {
        match self {
            Filter::All => Filter::Pending,
            Filter::Completed => Filter::All,
            Filter::Pending => Filter::Completed,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches() {
        let done = Task::new("1", "a", true);
        let open = Task::new("2", "b", false);

        assert!(Filter::All.matches(&done) && Filter::All.matches(&open));
        assert!(Filter::Completed.matches(&done) && !Filter::Completed.matches(&open));
        assert!(!Filter::Pending.matches(&done) && Filter::Pending.matches(&open));
    }

    #[test]
    fn test_cycle_visits_every_filter() {
        let mut filter = Filter::All;
        for expected in [Filter::Completed, Filter::Pending, Filter::All] {
            filter = filter.next();
            assert_eq!(filter, expected);
            assert_eq!(filter.next().prev(), filter);
        }
    }
}
