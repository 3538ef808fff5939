//! Session state: the current-user cache and the service wrapping it.

mod cache;
mod service;

pub use cache::{SessionCache, CURRENT_USER_KEY, CURRENT_USER_TTL};
pub use service::{CurrentUserService, IdentityGateway};
