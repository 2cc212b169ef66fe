//! Registration page for donors and organizations.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

use crate::net::types::{RegisterRequest, Role};
#[cfg(feature = "hydrate")]
use crate::state::session::Session;
use crate::util::validation::{MSG_INVALID_EMAIL, is_valid_email};

pub const MIN_PASSWORD_LEN: usize = 8;
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const MSG_PASSWORDS_DIFFER: &str = "Passwords must match";

/// Account types offered at sign-up. Admins are provisioned elsewhere.
pub const ACCOUNT_TYPES: [(Role, &str); 2] =
    [(Role::Donor, "I want to donate"), (Role::Organization, "We are an environmental organization")];

/// Check registration input before it leaves the browser.
///
/// # Errors
///
/// Returns the first problem found, in field order.
pub fn validate_register_input(
    email: &str,
    password: &str,
    confirm: &str,
    role: Role,
) -> Result<RegisterRequest, &'static str> {
    let email = email.trim();
    if !is_valid_email(email) {
        return Err(MSG_INVALID_EMAIL);
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(MSG_PASSWORD_TOO_SHORT);
    }
    if password != confirm {
        return Err(MSG_PASSWORDS_DIFFER);
    }
    Ok(RegisterRequest { email: email.to_owned(), password: password.to_owned(), role })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    #[cfg(feature = "hydrate")]
    let session = expect_context::<RwSignal<Session>>();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Donor);
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_register_input(&email.get(), &password.get(), &confirm.get(), role.get()) {
            Ok(request) => request,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&request).await {
                    Ok(user) => {
                        let target = crate::util::auth::landing_path(&user);
                        crate::util::auth::sign_in(session, user);
                        info.set(String::new());
                        navigate(target, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => info.set(format!("Registration failed: {e}")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create an Account"</h1>
                <p class="auth-card__subtitle">"Join the EcoGuard community"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Confirm password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <fieldset class="auth-roles">
                        {ACCOUNT_TYPES
                            .into_iter()
                            .map(|(value, label)| {
                                view! {
                                    <label class="form-check">
                                        <input
                                            type="radio"
                                            name="accountType"
                                            value=value.as_str()
                                            prop:checked=move || role.get() == value
                                            on:change=move |_| role.set(value)
                                        />
                                        {label}
                                    </label>
                                }
                            })
                            .collect_view()}
                    </fieldset>
                    <button class="btn auth-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__footer">
                    "Already registered? " <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
