//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the session from Leptos context; form components own
//! their state for the lifetime of the mounted view.

pub mod donation_form;
pub mod navbar;
pub mod route_guard;
