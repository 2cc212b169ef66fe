//! Authentication gate for protected routes.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::session::Session;
use crate::util::auth::{GuardDecision, guard_decision};

/// Render `children` only for an authenticated session; otherwise redirect
/// to the login route. Roles are not checked here.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let decision = Memo::new(move |_| session.with(guard_decision));

    move || match decision.get() {
        GuardDecision::Pending => view! { <p class="route-guard__pending">"Loading..."</p> }.into_any(),
        GuardDecision::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
        GuardDecision::Render => children().into_any(),
    }
}
