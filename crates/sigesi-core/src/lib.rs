//! Core domain layer for the SIGESI client.
//!
//! Holds the domain models mirroring the backend's wire format, the shared
//! error type, the login handshake state machine, and the current-user
//! session cache. Everything that talks to the network or the filesystem
//! lives behind traits implemented in the outer crates.

pub mod auth;
pub mod error;
pub mod model;
pub mod session;

// Re-export common error type
pub use error::{Result, SigesiError};
