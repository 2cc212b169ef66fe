//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once by `App` as `RwSignal<Session>` and read by the navbar and
//! the route guard. The session is owned by the external auth service; this
//! side only mirrors it and asks for logout.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::{Role, User};

/// `localStorage` key holding the signed-in user between page loads.
pub const SESSION_STORAGE_KEY: &str = "ecoguard_session";

/// Authentication snapshot.
///
/// `loading` stays true until the browser copy has been read back, which
/// keeps SSR output and the first hydrated render from guessing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl Session {
    /// Session after the stored copy (if any) has been read.
    pub fn restored(user: Option<User>) -> Self {
        Self { user, loading: false }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().and_then(|u| u.role)
    }

    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.loading = false;
    }

    pub fn logout(&mut self) {
        self.user = None;
        self.loading = false;
    }
}
