//! Client configuration.
//!
//! Resolution order for the backend base URL: `SIGESI_API_BASE` environment
//! variable, then `config.toml`, then the default development backend.

use serde::{Deserialize, Serialize};
use sigesi_core::Result;

use crate::paths::SigesiPaths;
use crate::storage::TomlFile;

/// Environment variable overriding the configured backend base URL.
pub const API_BASE_ENV: &str = "SIGESI_API_BASE";

/// Default backend base URL for local development.
pub const DEFAULT_API_BASE: &str = "http://localhost:8080";

/// Persisted client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the SIGESI backend, without a trailing slash.
    pub api_base: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }
}

impl ClientConfig {
    /// Normalizes the base URL by stripping any trailing slash, so joining
    /// with the backend's absolute paths never doubles a `/`.
    pub fn normalized_api_base(&self) -> String {
        self.api_base.trim_end_matches('/').to_string()
    }
}

/// Loads and saves the client configuration file.
pub struct ConfigStore {
    file: TomlFile<ClientConfig>,
}

impl ConfigStore {
    /// Creates a store over the default config path.
    pub fn new() -> Result<Self> {
        Ok(Self {
            file: TomlFile::new(SigesiPaths::config_file()?),
        })
    }

    /// Creates a store over an explicit path (tests, portable installs).
    pub fn at(path: std::path::PathBuf) -> Self {
        Self {
            file: TomlFile::new(path),
        }
    }

    /// Loads the configuration, applying the env override and falling back
    /// to defaults when no file exists.
    pub fn load(&self) -> Result<ClientConfig> {
        let mut config = self.file.load()?.unwrap_or_default();
        if let Ok(base) = std::env::var(API_BASE_ENV) {
            if !base.trim().is_empty() {
                config.api_base = base;
            }
        }
        Ok(config)
    }

    /// Persists the configuration.
    pub fn save(&self, config: &ClientConfig) -> Result<()> {
        self.file.save(config)
    }
}
