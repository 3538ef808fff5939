//! Short-lived client-side cache of the current user.

use std::sync::Mutex;
use std::time::{Duration, Instant};

use crate::auth::Clock;
use crate::model::Usuario;

/// The constant cache key for the current-user record.
pub const CURRENT_USER_KEY: &str = "user.me";

/// How long a fetched current-user record stays fresh.
pub const CURRENT_USER_TTL: Duration = Duration::from_secs(5 * 60);

struct CacheEntry {
    user: Usuario,
    stored_at: Instant,
}

/// In-memory cache of the current user, keyed by [`CURRENT_USER_KEY`].
///
/// Invariant: absent, or exactly one unexpired record. Expiry is read through
/// the injected [`Clock`], so it is testable without waiting.
pub struct SessionCache<C> {
    clock: C,
    ttl: Duration,
    entry: Mutex<Option<CacheEntry>>,
}

impl<C: Clock> SessionCache<C> {
    /// Creates an empty cache with the default TTL.
    pub fn new(clock: C) -> Self {
        Self::with_ttl(clock, CURRENT_USER_TTL)
    }

    /// Creates an empty cache with a custom TTL.
    pub fn with_ttl(clock: C, ttl: Duration) -> Self {
        Self {
            clock,
            ttl,
            entry: Mutex::new(None),
        }
    }

    /// Returns the cached record if present and unexpired.
    ///
    /// An expired record is dropped on read, restoring the "absent" state.
    pub fn get(&self) -> Option<Usuario> {
        let mut entry = self.entry.lock().unwrap_or_else(|e| e.into_inner());
        match entry.as_ref() {
            Some(cached) if self.clock.now().duration_since(cached.stored_at) < self.ttl => {
                Some(cached.user.clone())
            }
            Some(_) => {
                *entry = None;
                None
            }
            None => None,
        }
    }

    /// Stores a freshly fetched record, replacing any previous one.
    pub fn store(&self, user: Usuario) {
        let mut entry = self.entry.lock().unwrap_or_else(|e| e.into_inner());
        *entry = Some(CacheEntry {
            user,
            stored_at: self.clock.now(),
        });
    }

    /// Removes the cached record. Called on logout.
    pub fn invalidate(&self) {
        let mut entry = self.entry.lock().unwrap_or_else(|e| e.into_inner());
        *entry = None;
    }
}
