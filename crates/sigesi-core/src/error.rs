//! Error types for the SIGESI client.

use thiserror::Error;

/// A shared error type for the entire SIGESI client workspace.
///
/// This provides typed, structured error variants with automatic conversion
/// from common error types via the `From` trait.
#[derive(Error, Debug, Clone)]
pub enum SigesiError {
    /// Backend responded with a non-success status. The message is whatever
    /// the backend put in the JSON body (`message` or `error` field), falling
    /// back to the HTTP status text.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure: connect, TLS, request build, body read.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The login window could not be opened.
    #[error("Could not open the login window")]
    PopupBlocked,

    /// The login window was closed before the session was established.
    #[error("Login cancelled: the login window was closed")]
    LoginCancelled,

    /// The login flow did not complete within its time budget.
    #[error("Login timed out before the session was established")]
    LoginTimedOut,

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SigesiError {
    /// Creates an Api error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Creates an Http error.
    pub fn http(message: impl Into<String>) -> Self {
        Self::Http(message.into())
    }

    /// Creates a NotFound error.
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Creates an IO error.
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Serialization error.
    pub fn serialization(format: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Serialization {
            format: format.into(),
            message: message.into(),
        }
    }

    /// Creates a Config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Check if this is an API error with the given status.
    pub fn is_api_status(&self, wanted: u16) -> bool {
        matches!(self, Self::Api { status, .. } if *status == wanted)
    }

    /// Check if this error is one of the three user-visible login failures.
    pub fn is_login_failure(&self) -> bool {
        matches!(
            self,
            Self::PopupBlocked | Self::LoginCancelled | Self::LoginTimedOut
        )
    }

    /// Check if this is a NotFound error.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<std::io::Error> for SigesiError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for SigesiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<anyhow::Error> for SigesiError {
    fn from(err: anyhow::Error) -> Self {
        Self::Internal(err.to_string())
    }
}

/// A type alias for `Result<T, SigesiError>`.
pub type Result<T> = std::result::Result<T, SigesiError>;
