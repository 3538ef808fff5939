//! Login handshake state machine.
//!
//! The SIGESI backend owns the OAuth flow; the client cannot handle
//! credentials itself. Logging in therefore means opening a window at the
//! backend's OAuth entry point and polling a cheap authenticated endpoint
//! until the ambient session credential becomes valid, the user closes the
//! window, or the time budget runs out.
//!
//! The machine has four states: `Idle → Polling → { Succeeded | Cancelled |
//! TimedOut }`. Every collaborator (clock, probe, window, notifier) is
//! injected, so the flow runs identically under real timers and under a
//! simulated clock with scripted doubles.

use std::time::{Duration, Instant};

use crate::error::{Result, SigesiError};

use super::clock::Clock;
use super::notify::{LoginNotice, LoginNotifier};
use super::probe::{ProbeOutcome, SessionProbe};
use super::window::LoginWindowOpener;

/// Interval between session probes.
pub const POLL_INTERVAL: Duration = Duration::from_millis(1500);

/// Total budget for the login flow.
pub const LOGIN_TIMEOUT: Duration = Duration::from_secs(120);

/// Reason a login flow reached a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalReason {
    Succeeded,
    Cancelled,
    TimedOut,
}

/// Observable state of a login flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeState {
    /// No flow started yet.
    Idle,
    /// Window open, probing the backend.
    Polling { attempts: u32, started_at: Instant },
    /// Flow finished; the poll loop is torn down and will not tick again.
    Terminal(TerminalReason),
}

/// Drives one login flow from window open to a terminal state.
///
/// A `LoginHandshake` is single-use: once terminal, [`run`](Self::run)
/// refuses to start again. Start a second flow with a second value.
pub struct LoginHandshake<P, C, N> {
    probe: P,
    clock: C,
    notifier: N,
    interval: Duration,
    timeout: Duration,
    state: HandshakeState,
}

impl<P, C, N> LoginHandshake<P, C, N>
where
    P: SessionProbe,
    C: Clock,
    N: LoginNotifier,
{
    /// Creates a handshake with the default interval and timeout.
    pub fn new(probe: P, clock: C, notifier: N) -> Self {
        Self {
            probe,
            clock,
            notifier,
            interval: POLL_INTERVAL,
            timeout: LOGIN_TIMEOUT,
            state: HandshakeState::Idle,
        }
    }

    /// Overrides the probe interval.
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    /// Overrides the total time budget.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns the current state of the flow.
    pub fn state(&self) -> HandshakeState {
        self.state
    }

    /// Runs the flow to completion.
    ///
    /// Opens the login window at `url`, then probes immediately and at every
    /// interval tick. Exactly one terminal notification is delivered through
    /// the notifier, on every path. Returns `Ok(())` on success.
    ///
    /// # Errors
    ///
    /// - [`SigesiError::PopupBlocked`] when the window cannot be opened; the
    ///   flow stays `Idle` and zero probes are issued.
    /// - [`SigesiError::LoginCancelled`] when the user closes the window.
    /// - [`SigesiError::LoginTimedOut`] when the budget elapses; the window
    ///   is force-closed.
    /// - [`SigesiError::Internal`] when called on a flow that already ran.
    pub async fn run(&mut self, opener: &dyn LoginWindowOpener, url: &str) -> Result<()> {
        if !matches!(self.state, HandshakeState::Idle) {
            return Err(SigesiError::internal(
                "login flow already ran; create a new handshake",
            ));
        }

        let mut window = match opener.open(url) {
            Ok(window) => window,
            Err(err) => {
                tracing::warn!("login window could not be opened: {}", err);
                self.notifier.notify(LoginNotice::WindowBlocked);
                return Err(err);
            }
        };

        let started_at = self.clock.now();
        self.state = HandshakeState::Polling {
            attempts: 0,
            started_at,
        };

        loop {
            let attempt = self.bump_attempts();

            match self.probe.probe().await {
                ProbeOutcome::Authenticated => {
                    window.close();
                    return self.finish(TerminalReason::Succeeded);
                }
                ProbeOutcome::NotAuthenticated { detail } => {
                    // Expected mid-flow; diagnostics only, never the user.
                    tracing::debug!(attempt, %detail, "login probe not yet authenticated");
                }
            }

            if window.is_closed() {
                return self.finish(TerminalReason::Cancelled);
            }

            if self.clock.now().duration_since(started_at) > self.timeout {
                window.close();
                return self.finish(TerminalReason::TimedOut);
            }

            self.clock.sleep(self.interval).await;
        }
    }

    fn bump_attempts(&mut self) -> u32 {
        if let HandshakeState::Polling { attempts, .. } = &mut self.state {
            *attempts += 1;
            *attempts
        } else {
            0
        }
    }

    /// Tears the flow down: records the terminal state and delivers the one
    /// terminal notification.
    fn finish(&mut self, reason: TerminalReason) -> Result<()> {
        self.state = HandshakeState::Terminal(reason);
        match reason {
            TerminalReason::Succeeded => {
                self.notifier.notify(LoginNotice::Succeeded);
                Ok(())
            }
            TerminalReason::Cancelled => {
                self.notifier.notify(LoginNotice::Cancelled);
                Err(SigesiError::LoginCancelled)
            }
            TerminalReason::TimedOut => {
                self.notifier.notify(LoginNotice::TimedOut);
                Err(SigesiError::LoginTimedOut)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::window::LoginWindow;
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Simulated clock: `sleep` advances time instantly.
    #[derive(Clone)]
    struct MockClock {
        now: Arc<Mutex<Instant>>,
        sleeps: Arc<AtomicUsize>,
    }

    impl MockClock {
        fn new() -> Self {
            Self {
                now: Arc::new(Mutex::new(Instant::now())),
                sleeps: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn sleep_count(&self) -> usize {
            self.sleeps.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl Clock for MockClock {
        fn now(&self) -> Instant {
            *self.now.lock().unwrap()
        }

        async fn sleep(&self, duration: Duration) {
            let mut now = self.now.lock().unwrap();
            *now += duration;
            self.sleeps.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Probe double: pops scripted outcomes, then fails forever.
    #[derive(Clone)]
    struct ScriptedProbe {
        script: Arc<Mutex<VecDeque<ProbeOutcome>>>,
        calls: Arc<AtomicUsize>,
    }

    impl ScriptedProbe {
        fn new(outcomes: Vec<ProbeOutcome>) -> Self {
            Self {
                script: Arc::new(Mutex::new(outcomes.into())),
                calls: Arc::new(AtomicUsize::new(0)),
            }
        }

        fn always_failing() -> Self {
            Self::new(Vec::new())
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl SessionProbe for ScriptedProbe {
        async fn probe(&self) -> ProbeOutcome {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| ProbeOutcome::not_authenticated("401 Unauthorized"))
        }
    }

    struct FakeWindow {
        closed: Arc<AtomicBool>,
        close_calls: Arc<AtomicUsize>,
    }

    impl LoginWindow for FakeWindow {
        fn is_closed(&self) -> bool {
            self.closed.load(Ordering::SeqCst)
        }

        fn close(&mut self) {
            self.closed.store(true, Ordering::SeqCst);
            self.close_calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Opener double sharing the window flags with the test body.
    #[derive(Clone)]
    struct FakeOpener {
        closed: Arc<AtomicBool>,
        close_calls: Arc<AtomicUsize>,
        opened_urls: Arc<Mutex<Vec<String>>>,
    }

    impl FakeOpener {
        fn new() -> Self {
            Self {
                closed: Arc::new(AtomicBool::new(false)),
                close_calls: Arc::new(AtomicUsize::new(0)),
                opened_urls: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn with_window_already_closed() -> Self {
            let opener = Self::new();
            opener.closed.store(true, Ordering::SeqCst);
            opener
        }

        fn close_calls(&self) -> usize {
            self.close_calls.load(Ordering::SeqCst)
        }
    }

    impl LoginWindowOpener for FakeOpener {
        fn open(&self, url: &str) -> Result<Box<dyn LoginWindow>> {
            self.opened_urls.lock().unwrap().push(url.to_string());
            Ok(Box::new(FakeWindow {
                closed: self.closed.clone(),
                close_calls: self.close_calls.clone(),
            }))
        }
    }

    struct BlockedOpener;

    impl LoginWindowOpener for BlockedOpener {
        fn open(&self, _url: &str) -> Result<Box<dyn LoginWindow>> {
            Err(SigesiError::PopupBlocked)
        }
    }

    #[derive(Clone)]
    struct RecordingNotifier {
        notices: Arc<Mutex<Vec<LoginNotice>>>,
    }

    impl RecordingNotifier {
        fn new() -> Self {
            Self {
                notices: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn notices(&self) -> Vec<LoginNotice> {
            self.notices.lock().unwrap().clone()
        }
    }

    impl LoginNotifier for RecordingNotifier {
        fn notify(&self, notice: LoginNotice) {
            self.notices.lock().unwrap().push(notice);
        }
    }

    const OAUTH_URL: &str = "http://localhost:8080/oauth2/authorization/google";

    #[tokio::test]
    async fn test_happy_path_succeeds_on_third_probe() {
        let probe = ScriptedProbe::new(vec![
            ProbeOutcome::not_authenticated("401"),
            ProbeOutcome::not_authenticated("500"),
            ProbeOutcome::Authenticated,
        ]);
        let clock = MockClock::new();
        let notifier = RecordingNotifier::new();
        let opener = FakeOpener::new();

        let mut handshake = LoginHandshake::new(probe.clone(), clock.clone(), notifier.clone());
        handshake.run(&opener, OAUTH_URL).await.unwrap();

        // Exactly 3 probes; a 4th tick never fires.
        assert_eq!(probe.call_count(), 3);
        assert_eq!(clock.sleep_count(), 2);
        assert_eq!(opener.close_calls(), 1);
        assert_eq!(notifier.notices(), vec![LoginNotice::Succeeded]);
        assert_eq!(
            handshake.state(),
            HandshakeState::Terminal(TerminalReason::Succeeded)
        );
    }

    #[tokio::test]
    async fn test_cancelled_when_window_closed_before_success() {
        let probe = ScriptedProbe::always_failing();
        let notifier = RecordingNotifier::new();
        let opener = FakeOpener::with_window_already_closed();

        let mut handshake = LoginHandshake::new(probe.clone(), MockClock::new(), notifier.clone());
        let err = handshake.run(&opener, OAUTH_URL).await.unwrap_err();

        assert!(matches!(err, SigesiError::LoginCancelled));
        // The closed window is noticed on the first check; no further requests.
        assert_eq!(probe.call_count(), 1);
        assert_eq!(notifier.notices(), vec![LoginNotice::Cancelled]);
        // The user closed it; the handshake does not close it again.
        assert_eq!(opener.close_calls(), 0);
        assert_eq!(
            handshake.state(),
            HandshakeState::Terminal(TerminalReason::Cancelled)
        );
    }

    #[tokio::test]
    async fn test_timeout_force_closes_window() {
        let probe = ScriptedProbe::always_failing();
        let clock = MockClock::new();
        let notifier = RecordingNotifier::new();
        let opener = FakeOpener::new();

        let mut handshake = LoginHandshake::new(probe.clone(), clock.clone(), notifier.clone())
            .with_interval(Duration::from_secs(1))
            .with_timeout(Duration::from_millis(2500));
        let err = handshake.run(&opener, OAUTH_URL).await.unwrap_err();

        assert!(matches!(err, SigesiError::LoginTimedOut));
        // Probes at t = 0s, 1s, 2s, 3s; 3s exceeds the 2.5s budget.
        assert_eq!(probe.call_count(), 4);
        assert_eq!(opener.close_calls(), 1);
        assert_eq!(notifier.notices(), vec![LoginNotice::TimedOut]);
        assert_eq!(
            handshake.state(),
            HandshakeState::Terminal(TerminalReason::TimedOut)
        );
    }

    #[tokio::test]
    async fn test_blocked_window_short_circuits() {
        let probe = ScriptedProbe::new(vec![ProbeOutcome::Authenticated]);
        let notifier = RecordingNotifier::new();

        let mut handshake = LoginHandshake::new(probe.clone(), MockClock::new(), notifier.clone());
        let err = handshake.run(&BlockedOpener, OAUTH_URL).await.unwrap_err();

        assert!(matches!(err, SigesiError::PopupBlocked));
        assert_eq!(probe.call_count(), 0);
        assert_eq!(notifier.notices(), vec![LoginNotice::WindowBlocked]);
        // A blocked attempt never left Idle and may be retried.
        assert_eq!(handshake.state(), HandshakeState::Idle);
    }

    #[tokio::test]
    async fn test_terminal_flow_refuses_to_restart() {
        let probe = ScriptedProbe::new(vec![ProbeOutcome::Authenticated]);
        let notifier = RecordingNotifier::new();
        let opener = FakeOpener::new();

        let mut handshake = LoginHandshake::new(probe.clone(), MockClock::new(), notifier.clone());
        handshake.run(&opener, OAUTH_URL).await.unwrap();

        let err = handshake.run(&opener, OAUTH_URL).await.unwrap_err();
        assert!(matches!(err, SigesiError::Internal(_)));
        // Teardown happened exactly once: no new probes, no new notices.
        assert_eq!(probe.call_count(), 1);
        assert_eq!(notifier.notices(), vec![LoginNotice::Succeeded]);
    }

    #[tokio::test]
    async fn test_exactly_one_notice_regardless_of_tick_count() {
        let mut script = vec![ProbeOutcome::not_authenticated("503"); 9];
        script.push(ProbeOutcome::Authenticated);
        let probe = ScriptedProbe::new(script);
        let notifier = RecordingNotifier::new();
        let opener = FakeOpener::new();

        let mut handshake = LoginHandshake::new(probe.clone(), MockClock::new(), notifier.clone());
        handshake.run(&opener, OAUTH_URL).await.unwrap();

        assert_eq!(probe.call_count(), 10);
        assert_eq!(notifier.notices().len(), 1);
    }

    #[tokio::test]
    async fn test_first_probe_fires_immediately() {
        let probe = ScriptedProbe::new(vec![ProbeOutcome::Authenticated]);
        let clock = MockClock::new();
        let opener = FakeOpener::new();

        let mut handshake =
            LoginHandshake::new(probe.clone(), clock.clone(), RecordingNotifier::new());
        handshake.run(&opener, OAUTH_URL).await.unwrap();

        assert_eq!(probe.call_count(), 1);
        assert_eq!(clock.sleep_count(), 0);
    }
}
