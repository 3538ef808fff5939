//! User-facing login notifications.

/// Terminal outcome of a login flow, surfaced to the user exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginNotice {
    /// Session established.
    Succeeded,
    /// The login window was closed before the session was established.
    Cancelled,
    /// The flow did not complete within its time budget.
    TimedOut,
    /// The login window could not be opened at all.
    WindowBlocked,
}

/// Sink for login notifications (a console line in the CLI, a recording
/// double in tests).
pub trait LoginNotifier: Send + Sync {
    /// Delivers one notification. The handshake guarantees at most one
    /// terminal notice per flow invocation.
    fn notify(&self, notice: LoginNotice);
}
