//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard, login/register pages, and navbar all move the session
//! through the same transitions; these helpers keep the `localStorage`
//! mirror and redirect targets consistent between them.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::net::types::{Role, User};
use crate::state::session::{SESSION_STORAGE_KEY, Session};
use crate::util::persistence;

pub const LOGIN_PATH: &str = "/login";

/// What the route guard should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session not yet restored; render neither the view nor a redirect.
    Pending,
    Redirect(&'static str),
    Render,
}

pub fn guard_decision(session: &Session) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Render
    } else if session.loading {
        GuardDecision::Pending
    } else {
        GuardDecision::Redirect(LOGIN_PATH)
    }
}

/// Where to send a user right after signing in.
pub fn landing_path(user: &User) -> &'static str {
    match user.role {
        Some(Role::Donor) => "/donate",
        Some(Role::Admin | Role::Organization) | None => "/impact",
    }
}

/// Restore the session from `localStorage`. Call once after hydration.
pub fn restore_session(session: RwSignal<Session>) {
    let user = persistence::load_json::<User>(SESSION_STORAGE_KEY);
    session.set(Session::restored(user));
}

pub fn sign_in(session: RwSignal<Session>, user: User) {
    persistence::save_json(SESSION_STORAGE_KEY, &user);
    session.update(|s| s.sign_in(user));
}

/// Drop the local session and tell the auth service, fire-and-forget.
pub fn sign_out(session: RwSignal<Session>) {
    persistence::remove(SESSION_STORAGE_KEY);
    session.update(Session::logout);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::net::api::logout());
}
