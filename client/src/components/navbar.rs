//! Top navigation bar with role-specific links and sign-in/out controls.
//!
//! SYSTEM CONTEXT
//! ==============
//! Role gating here is presentational only; `RequireAuth` is the sole guard.
//! A signed-in user whose role is blank gets no role links at all.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Role;
use crate::state::session::Session;
use crate::util::auth::{LOGIN_PATH, sign_out};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const ADMIN_LINKS: &[NavLink] = &[
    NavLink { label: "Review Applications", href: "/review-applications" },
    NavLink { label: "Impact", href: "/impact" },
];

pub const ORGANIZATION_LINKS: &[NavLink] = &[
    NavLink { label: "Apply as Organization", href: "/apply-organization" },
    NavLink { label: "Organization Profile", href: "/organization-profile" },
    NavLink { label: "Manage Donations", href: "/manage-donations" },
    NavLink { label: "Post a Story", href: "/post-story" },
    NavLink { label: "Beneficiaries & Inventory", href: "/beneficiary-list" },
];

pub const DONOR_LINKS: &[NavLink] = &[
    NavLink { label: "Donate to an Organization", href: "/donate" },
    NavLink { label: "Impact", href: "/impact" },
    NavLink { label: "About", href: "/about" },
];

/// Navbar view state derived from the session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavState {
    Unauthenticated,
    Member { email: String, role: Option<Role> },
}

impl NavState {
    pub fn from_session(session: &Session) -> Self {
        match &session.user {
            Some(user) => Self::Member { email: user.email.clone(), role: user.role },
            None => Self::Unauthenticated,
        }
    }

    pub fn links(&self) -> &'static [NavLink] {
        match self {
            Self::Unauthenticated | Self::Member { role: None, .. } => &[],
            Self::Member { role: Some(Role::Admin), .. } => ADMIN_LINKS,
            Self::Member { role: Some(Role::Organization), .. } => ORGANIZATION_LINKS,
            Self::Member { role: Some(Role::Donor), .. } => DONOR_LINKS,
        }
    }
}

pub fn menu_class(open: bool) -> &'static str {
    if open { "navbar__menu navbar__menu--open" } else { "navbar__menu" }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let navigate = use_navigate();
    let menu_open = RwSignal::new(false);

    let nav_state = Memo::new(move |_| session.with(NavState::from_session));

    let on_logout = move |_: leptos::ev::MouseEvent| {
        menu_open.set(false);
        sign_out(session);
        navigate(LOGIN_PATH, NavigateOptions::default());
    };

    view! {
        <nav class="navbar">
            <div class="navbar__bar">
                <a href="/" class="navbar__brand">"🌿 EcoGuard"</a>
                <button
                    class="navbar__toggle"
                    type="button"
                    aria-label="Toggle navigation"
                    aria-expanded=move || if menu_open.get() { "true" } else { "false" }
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
                <div class=move || menu_class(menu_open.get())>
                    {move || {
                        nav_state
                            .get()
                            .links()
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        class="navbar__link"
                                        on:click=move |_| menu_open.set(false)
                                    >
                                        {link.label}
                                    </a>
                                }
                            })
                            .collect_view()
                    }}
                    {move || match nav_state.get() {
                        NavState::Unauthenticated => {
                            view! {
                                <a href=LOGIN_PATH class="btn navbar__sign-in">
                                    "Sign In"
                                </a>
                            }
                                .into_any()
                        }
                        NavState::Member { email, .. } => {
                            let on_logout = on_logout.clone();
                            view! {
                                <span class="navbar__welcome">"Welcome, " {email}</span>
                                <button class="btn navbar__sign-out" type="button" on:click=on_logout>
                                    "Sign Out"
                                </button>
                            }
                                .into_any()
                        }
                    }}
                </div>
            </div>
        </nav>
    }
}
