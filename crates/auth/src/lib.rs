//! `invoicedesk-auth` — session state machine.
//!
//! Placeholder authentication: one configured credential pair, one session
//! slot. A stand-in for a real credential check, not a security boundary to
//! harden in place.

pub mod session;

pub use session::{Credentials, SessionStore, User};
