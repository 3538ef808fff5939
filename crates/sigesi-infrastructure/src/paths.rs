//! Unified path management for SIGESI client configuration files.
//!
//! All client configuration and the persisted session credential live under
//! the platform config directory (e.g. `~/.config/sigesi/` on Linux).

use std::path::PathBuf;

use sigesi_core::{Result, SigesiError};

/// Unified path resolution for the SIGESI client.
///
/// # Directory Structure
///
/// ```text
/// ~/.config/sigesi/            # Config directory
/// ├── config.toml              # Client configuration (backend base URL)
/// └── session.toml             # Persisted session credential
/// ```
pub struct SigesiPaths;

impl SigesiPaths {
    /// Returns the SIGESI configuration directory.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join("sigesi"))
            .ok_or_else(|| SigesiError::config("cannot determine the user config directory"))
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the persisted session credential.
    ///
    /// # Security Note
    ///
    /// The credential store keeps this file at mode 600 on Unix.
    pub fn session_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("session.toml"))
    }
}
