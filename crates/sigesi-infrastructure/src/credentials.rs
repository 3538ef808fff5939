//! Persistent session credential storage.
//!
//! The browser keeps the backend's session cookie in its ambient jar; the
//! native client makes that credential explicit and persists it between runs
//! in `session.toml` under the config directory.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sigesi_core::Result;

use crate::paths::SigesiPaths;
use crate::storage::TomlFile;

/// A captured backend session cookie, e.g. `JSESSIONID=abc123`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionCredential {
    /// The cookie pair as sent in the `Cookie` request header.
    pub cookie: String,
    /// When the cookie was captured.
    pub saved_at: DateTime<Utc>,
}

/// Loads, saves and clears the persisted session credential.
///
/// # Security Note
///
/// The session file holds a live credential; it is written with mode 600 on
/// Unix.
pub struct CredentialStore {
    file: TomlFile<SessionCredential>,
}

impl CredentialStore {
    /// Creates a store over the default session path.
    pub fn new() -> Result<Self> {
        Ok(Self {
            file: TomlFile::new(SigesiPaths::session_file()?),
        })
    }

    /// Creates a store over an explicit path (tests).
    pub fn at(path: std::path::PathBuf) -> Self {
        Self {
            file: TomlFile::new(path),
        }
    }

    /// Returns the persisted credential, if any.
    pub fn load(&self) -> Result<Option<SessionCredential>> {
        self.file.load()
    }

    /// Persists a freshly captured cookie, replacing any previous one.
    pub fn save(&self, cookie: impl Into<String>) -> Result<()> {
        let credential = SessionCredential {
            cookie: cookie.into(),
            saved_at: Utc::now(),
        };
        self.file.save(&credential)?;
        self.restrict_permissions()?;
        Ok(())
    }

    /// Removes the persisted credential. Called on logout.
    pub fn clear(&self) -> Result<()> {
        self.file.remove()
    }

    #[cfg(unix)]
    fn restrict_permissions(&self) -> Result<()> {
        use std::os::unix::fs::PermissionsExt;
        let permissions = std::fs::Permissions::from_mode(0o600);
        std::fs::set_permissions(self.file.path(), permissions)?;
        Ok(())
    }

    #[cfg(not(unix))]
    fn restrict_permissions(&self) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = CredentialStore::at(temp_dir.path().join("session.toml"));

        assert!(store.load().unwrap().is_none());

        store.save("JSESSIONID=abc123").unwrap();
        let credential = store.load().unwrap().unwrap();
        assert_eq!(credential.cookie, "JSESSIONID=abc123");
    }

    #[test]
    fn test_clear_removes_credential() {
        let temp_dir = TempDir::new().unwrap();
        let store = CredentialStore::at(temp_dir.path().join("session.toml"));

        store.save("JSESSIONID=abc123").unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());

        // Clearing twice is not an error.
        store.clear().unwrap();
    }

    #[cfg(unix)]
    #[test]
    fn test_session_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("session.toml");
        let store = CredentialStore::at(path.clone());

        store.save("JSESSIONID=abc123").unwrap();
        let mode = std::fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
