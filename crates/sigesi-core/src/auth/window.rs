//! Login window abstraction.

use crate::error::Result;

/// A browser window opened at the backend's OAuth entry point.
///
/// The handshake only ever asks two things of the window: whether the user
/// closed it, and to close it. `close` is best-effort and idempotent.
pub trait LoginWindow: Send {
    /// Reports whether the user has closed the window.
    fn is_closed(&self) -> bool;

    /// Closes the window if it is still open. Must be safe to call more
    /// than once and on an already-closed window.
    fn close(&mut self);
}

/// Opens the login window at the OAuth entry URL.
pub trait LoginWindowOpener: Send + Sync {
    /// Opens a window at `url`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::SigesiError::PopupBlocked`] when no window could be
    /// opened (popup blocker, no browser available). The handshake reports
    /// this immediately and never starts polling.
    fn open(&self, url: &str) -> Result<Box<dyn LoginWindow>>;
}
