//! Login handshake: popup-open-and-poll detection of a server-delegated
//! OAuth login.
//!
//! # Module Structure
//!
//! - `clock`: injectable time source
//! - `probe`: the "am I logged in" request abstraction
//! - `window`: login window open/close abstraction
//! - `notify`: user-facing terminal notifications
//! - `handshake`: the state machine driving one login flow

mod clock;
mod handshake;
mod notify;
mod probe;
mod window;

pub use clock::{Clock, SystemClock};
pub use handshake::{
    HandshakeState, LoginHandshake, TerminalReason, LOGIN_TIMEOUT, POLL_INTERVAL,
};
pub use notify::{LoginNotice, LoginNotifier};
pub use probe::{ProbeOutcome, SessionProbe};
pub use window::{LoginWindow, LoginWindowOpener};
