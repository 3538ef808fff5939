//! Current-user service: identity fetch, cache, and logout.

use crate::auth::Clock;
use crate::error::Result;
use crate::model::Usuario;

use super::cache::SessionCache;

/// Backend operations the session layer depends on.
///
/// The production implementation lives in the HTTP client crate; tests
/// substitute a scripted double.
#[async_trait::async_trait]
pub trait IdentityGateway: Send + Sync {
    /// Fetches the current user from the backend.
    async fn fetch_current_user(&self) -> Result<Usuario>;

    /// Invalidates the server-side session.
    async fn logout(&self) -> Result<()>;
}

/// Read-through cache over the backend's current-user endpoint.
pub struct CurrentUserService<G, C> {
    gateway: G,
    cache: SessionCache<C>,
}

impl<G, C> CurrentUserService<G, C>
where
    G: IdentityGateway,
    C: Clock,
{
    pub fn new(gateway: G, cache: SessionCache<C>) -> Self {
        Self { gateway, cache }
    }

    /// Returns the current user, from cache when fresh.
    pub async fn current_user(&self) -> Result<Usuario> {
        if let Some(user) = self.cache.get() {
            return Ok(user);
        }
        self.refresh().await
    }

    /// Fetches the current user from the backend, bypassing the cache.
    pub async fn refresh(&self) -> Result<Usuario> {
        let user = self.gateway.fetch_current_user().await?;
        self.cache.store(user.clone());
        Ok(user)
    }

    /// Logs out: fire-and-forget towards the backend, then clears the cache.
    ///
    /// A failed logout request is logged and otherwise ignored; the local
    /// session state is cleared regardless of its outcome.
    pub async fn logout(&self) {
        if let Err(err) = self.gateway.logout().await {
            tracing::warn!("logout request failed: {}", err);
        }
        self.cache.invalidate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::Clock;
    use crate::error::SigesiError;
    use crate::model::PerfilUsuario;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use std::time::{Duration, Instant};

    #[derive(Clone)]
    struct MockClock {
        now: Arc<Mutex<Instant>>,
    }

    impl MockClock {
        fn new() -> Self {
            Self {
                now: Arc::new(Mutex::new(Instant::now())),
            }
        }

        fn advance(&self, duration: Duration) {
            *self.now.lock().unwrap() += duration;
        }
    }

    #[async_trait::async_trait]
    impl Clock for MockClock {
        fn now(&self) -> Instant {
            *self.now.lock().unwrap()
        }

        async fn sleep(&self, duration: Duration) {
            self.advance(duration);
        }
    }

    struct MockGateway {
        fetches: AtomicUsize,
        logouts: AtomicUsize,
        fail_logout: bool,
    }

    impl MockGateway {
        fn new() -> Self {
            Self {
                fetches: AtomicUsize::new(0),
                logouts: AtomicUsize::new(0),
                fail_logout: false,
            }
        }

        fn with_failing_logout() -> Self {
            Self {
                fail_logout: true,
                ..Self::new()
            }
        }
    }

    #[async_trait::async_trait]
    impl IdentityGateway for Arc<MockGateway> {
        async fn fetch_current_user(&self) -> crate::Result<Usuario> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            Ok(Usuario {
                id: 1,
                nome: "Maria".to_string(),
                email: "maria@example.com".to_string(),
                perfil: PerfilUsuario::Operador,
                ativo: true,
            })
        }

        async fn logout(&self) -> crate::Result<()> {
            self.logouts.fetch_add(1, Ordering::SeqCst);
            if self.fail_logout {
                Err(SigesiError::http("connection reset"))
            } else {
                Ok(())
            }
        }
    }

    #[tokio::test]
    async fn test_current_user_is_cached() {
        let gateway = Arc::new(MockGateway::new());
        let clock = MockClock::new();
        let service = CurrentUserService::new(gateway.clone(), SessionCache::new(clock));

        service.current_user().await.unwrap();
        service.current_user().await.unwrap();

        assert_eq!(gateway.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_cache_expires_after_ttl() {
        let gateway = Arc::new(MockGateway::new());
        let clock = MockClock::new();
        let service =
            CurrentUserService::new(gateway.clone(), SessionCache::new(clock.clone()));

        service.current_user().await.unwrap();
        clock.advance(Duration::from_secs(5 * 60 + 1));
        service.current_user().await.unwrap();

        assert_eq!(gateway.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_logout_clears_cache() {
        let gateway = Arc::new(MockGateway::new());
        let clock = MockClock::new();
        let service = CurrentUserService::new(gateway.clone(), SessionCache::new(clock));

        service.current_user().await.unwrap();
        service.logout().await;
        service.current_user().await.unwrap();

        assert_eq!(gateway.logouts.load(Ordering::SeqCst), 1);
        assert_eq!(gateway.fetches.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_logout_clears_cache_even_when_request_fails() {
        let gateway = Arc::new(MockGateway::with_failing_logout());
        let clock = MockClock::new();
        let service = CurrentUserService::new(gateway.clone(), SessionCache::new(clock));

        service.current_user().await.unwrap();
        service.logout().await;
        service.current_user().await.unwrap();

        assert_eq!(gateway.fetches.load(Ordering::SeqCst), 2);
    }
}
