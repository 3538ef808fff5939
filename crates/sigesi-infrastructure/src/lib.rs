//! Infrastructure layer for the SIGESI client: filesystem paths, TOML
//! storage, client configuration, and the persisted session credential.

pub mod config;
pub mod credentials;
pub mod paths;
pub mod storage;

pub use config::{ClientConfig, ConfigStore, API_BASE_ENV, DEFAULT_API_BASE};
pub use credentials::{CredentialStore, SessionCredential};
pub use paths::SigesiPaths;
pub use storage::TomlFile;
