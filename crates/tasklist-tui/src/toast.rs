//! Transient notifications shown over the task list.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use tracing::{info, warn};

use tasklist_core::{NoticeKind, Notifier};

/// Maximum number of toasts kept on screen.
const MAX_TOASTS: usize = 3;

/// A notice waiting to expire.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: NoticeKind,
    pub message: String,
    pub created_at: Instant,
}

/// Expiring toast stack; the `Notifier` used by the terminal UI.
#[derive(Debug)]
pub struct ToastQueue {
    toasts: VecDeque<Toast>,
    ttl: Duration,
}

impl ToastQueue {
    pub fn new(ttl: Duration) -> Self {
        Self {
            toasts: VecDeque::with_capacity(MAX_TOASTS),
            ttl,
        }
    }

    /// Drop toasts older than the TTL.
    pub fn prune(&mut self, now: Instant) {
        let ttl = self.ttl;
        self.toasts
            .retain(|toast| now.saturating_duration_since(toast.created_at) < ttl);
    }

    /// Toasts oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    fn push(&mut self, toast: Toast) {
        if self.toasts.len() == MAX_TOASTS {
            self.toasts.pop_front();
        }
        self.toasts.push_back(toast);
    }
}

impl Notifier for ToastQueue {
    fn notify(&mut self, kind: NoticeKind, message: &str) {
        match kind {
            NoticeKind::Error => warn!(toast = message, "Notification"),
            NoticeKind::Success | NoticeKind::Info => info!(toast = message, "Notification"),
        }
        self.push(Toast {
            kind,
            message: message.to_string(),
            created_at: Instant::now(),
        });
    }
}
