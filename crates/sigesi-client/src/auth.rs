//! Production implementations of the login handshake abstractions.

use std::process::Command;
use std::sync::Arc;

use sigesi_core::auth::{
    LoginWindow, LoginWindowOpener, ProbeOutcome, SessionProbe,
};
use sigesi_core::{Result, SigesiError};

use crate::api::ApiClient;

/// Backend path that starts the provider's OAuth redirect chain. Opened only
/// inside the login window, never fetched programmatically.
pub const OAUTH_ENTRY_PATH: &str = "/oauth2/authorization/google";

/// Cheap authenticated endpoint used as the "am I logged in" probe.
pub const PROBE_PATH: &str = "/api/solicitacoes/";

/// Probe issuing a real request against the backend.
///
/// Every failure cause (401, 500, connect error) collapses into
/// `NotAuthenticated`: mid-login failures are normal and must not spam the
/// user. The detail is kept for debug logs only.
#[derive(Clone)]
pub struct HttpSessionProbe {
    api: Arc<ApiClient>,
}

impl HttpSessionProbe {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[async_trait::async_trait]
impl SessionProbe for HttpSessionProbe {
    async fn probe(&self) -> ProbeOutcome {
        match self.api.check(PROBE_PATH).await {
            Ok(()) => ProbeOutcome::Authenticated,
            Err(err) => ProbeOutcome::not_authenticated(err.to_string()),
        }
    }
}

/// The system browser stood in for the SPA's popup window.
///
/// A detached browser tab cannot report closure, so `is_closed` always
/// answers `false` and the cancelled path is only reachable for embedders
/// with a real window handle; in the CLI, an abandoned login ends via the
/// timeout.
struct SystemBrowserWindow;

impl LoginWindow for SystemBrowserWindow {
    fn is_closed(&self) -> bool {
        false
    }

    fn close(&mut self) {
        // Nothing to do: the user's browser tab is not ours to close.
    }
}

/// Opens the OAuth entry URL in the system browser.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowserOpener;

impl SystemBrowserOpener {
    fn launcher(url: &str) -> Command {
        #[cfg(target_os = "macos")]
        {
            let mut cmd = Command::new("open");
            cmd.arg(url);
            cmd
        }
        #[cfg(target_os = "windows")]
        {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", url]);
            cmd
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(url);
            cmd
        }
    }

    /// Runs the launcher to completion. The launchers hand the URL off to
    /// the running browser and exit right away, so waiting both reaps the
    /// child and surfaces a hand-off failure.
    fn launch(mut cmd: Command) -> Result<()> {
        match cmd.status() {
            Ok(status) if status.success() => Ok(()),
            Ok(status) => {
                tracing::warn!(%status, "browser launcher exited with failure");
                Err(SigesiError::PopupBlocked)
            }
            Err(err) => {
                tracing::warn!("could not launch a browser: {}", err);
                Err(SigesiError::PopupBlocked)
            }
        }
    }
}

impl LoginWindowOpener for SystemBrowserOpener {
    fn open(&self, url: &str) -> Result<Box<dyn LoginWindow>> {
        tracing::debug!(url, "opening login window in the system browser");
        Self::launch(Self::launcher(url))?;
        Ok(Box::new(SystemBrowserWindow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(unix)]
    fn test_launch_reaps_successful_launcher() {
        assert!(SystemBrowserOpener::launch(Command::new("true")).is_ok());
    }

    #[test]
    #[cfg(unix)]
    fn test_failing_launcher_reported_as_blocked() {
        let err = SystemBrowserOpener::launch(Command::new("false")).unwrap_err();
        assert!(matches!(err, SigesiError::PopupBlocked));
    }

    #[test]
    fn test_missing_launcher_reported_as_blocked() {
        let mut cmd = Command::new("sigesi-no-such-browser-launcher");
        cmd.arg("http://localhost");
        let err = SystemBrowserOpener::launch(cmd).unwrap_err();
        assert!(matches!(err, SigesiError::PopupBlocked));
    }
}
