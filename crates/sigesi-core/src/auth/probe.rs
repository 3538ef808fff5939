//! Session probe abstraction.

/// Result of a single "am I logged in" probe.
///
/// The probe deliberately collapses every failure cause (401, 500, network
/// error) into [`ProbeOutcome::NotAuthenticated`]: mid-login failures are
/// expected and must not surface to the user. The detail string exists only
/// for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// The backend accepted the ambient credential; a session is established.
    Authenticated,
    /// Not authenticated yet, or a transient failure indistinguishable from it.
    NotAuthenticated { detail: String },
}

impl ProbeOutcome {
    /// Shorthand for a failed probe with a diagnostic detail.
    pub fn not_authenticated(detail: impl Into<String>) -> Self {
        Self::NotAuthenticated {
            detail: detail.into(),
        }
    }
}

/// One inexpensive authenticated request against the backend.
///
/// Implementations carry their own credential context (session cookie, test
/// double state) so the handshake never touches ambient globals.
#[async_trait::async_trait]
pub trait SessionProbe: Send + Sync {
    /// Issues one probe request and reports the outcome. Never fails: any
    /// transport or server error is reported as `NotAuthenticated`.
    async fn probe(&self) -> ProbeOutcome;
}
