//! HTTP layer for the SIGESI client: the typed REST client, one service per
//! backend resource, and the production implementations of the login
//! handshake abstractions.

pub mod api;
pub mod auth;
pub mod services;

pub use api::ApiClient;
pub use auth::{HttpSessionProbe, SystemBrowserOpener, OAUTH_ENTRY_PATH, PROBE_PATH};
