//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `donation`, `donation_form`) so
//! components depend on small focused models that can be tested without a
//! browser.

pub mod donation;
pub mod donation_form;
pub mod session;
