//! Notification capability.

/// Severity of a user-visible notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

/// Sink for transient user notifications (toasts).
///
/// The screen only decides *when* to notify; how a notice is displayed is up
/// to the implementation.
pub trait Notifier {
    fn notify(&mut self, kind: NoticeKind, message: &str);
}
