//! Clock abstraction for the login handshake and session cache.

use std::time::{Duration, Instant};

/// Source of time for components that poll or expire entries.
///
/// Injecting the clock lets the handshake and the session cache run under a
/// simulated clock in tests, with no real timers.
#[async_trait::async_trait]
pub trait Clock: Send + Sync {
    /// Returns the current instant.
    fn now(&self) -> Instant;

    /// Waits for the given duration before the next poll tick.
    async fn sleep(&self, duration: Duration);
}

/// Clock backed by the system time and the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[async_trait::async_trait]
impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
