use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use invoicedesk_core::UserId;

/// The authenticated session user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
}

/// The one configured credential pair logins are checked against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Default for Credentials {
    /// Reference credentials of the hosted deployment.
    fn default() -> Self {
        Self {
            username: "Webfrik".to_owned(),
            password: "@1234Web#".to_owned(),
        }
    }
}

/// Single-slot session store.
///
/// Starts logged out; a successful login fills the slot, logout clears it
/// unconditionally. Holding a session does not gate any store operation —
/// callers re-check [`SessionStore::current_user`] before mutating on a
/// user's behalf.
#[derive(Debug, Default)]
pub struct SessionStore {
    credentials: Credentials,
    current: Option<User>,
}

impl SessionStore {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            current: None,
        }
    }

    /// Exact-match check against the configured pair.
    ///
    /// On success the slot holds a fresh [`User`]; on failure the session
    /// state is left exactly as it was.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if username == self.credentials.username && password == self.credentials.password {
            self.current = Some(User {
                id: UserId::new(),
                username: username.to_owned(),
            });
            info!(username, "login succeeded");
            true
        } else {
            // Log the attempt, never the submitted password.
            warn!(username, "login rejected");
            false
        }
    }

    /// Unconditionally drop the session.
    pub fn logout(&mut self) {
        if self.current.take().is_some() {
            info!("logged out");
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.current.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_credentials_log_in() {
        let mut session = SessionStore::default();
        assert!(session.login("Webfrik", "@1234Web#"));
        assert!(session.is_logged_in());
        assert_eq!(session.current_user().unwrap().username, "Webfrik");
    }

    #[test]
    fn mismatched_credentials_are_rejected() {
        let mut session = SessionStore::default();
        assert!(!session.login("x", "y"));
        assert!(!session.is_logged_in());
        assert_eq!(session.current_user(), None);
    }

    #[test]
    fn failed_login_leaves_an_existing_session_alone() {
        let mut session = SessionStore::default();
        assert!(session.login("Webfrik", "@1234Web#"));
        let user = session.current_user().unwrap();

        assert!(!session.login("Webfrik", "wrong"));
        assert_eq!(session.current_user(), Some(user));
    }

    #[test]
    fn logout_is_unconditional() {
        let mut session = SessionStore::default();
        session.logout();
        assert!(!session.is_logged_in());

        session.login("Webfrik", "@1234Web#");
        session.logout();
        assert!(!session.is_logged_in());
    }

    #[test]
    fn custom_credentials_replace_the_default_pair() {
        let mut session = SessionStore::new(Credentials {
            username: "ops".to_owned(),
            password: "hunter2".to_owned(),
        });
        assert!(!session.login("Webfrik", "@1234Web#"));
        assert!(session.login("ops", "hunter2"));
    }
}
