//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::{navbar::Navbar, route_guard::RequireAuth};
use crate::pages::{
    about::AboutPage, donate::DonationPage, impact::ImpactPage, login::LoginPage, register::RegisterPage,
};
use crate::state::session::Session;
use crate::util::auth::{LOGIN_PATH, restore_session};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    provide_context(session);

    // Effects only run in the browser, so SSR always renders the loading state.
    Effect::new(move || restore_session(session));

    view! {
        <Stylesheet id="leptos" href="/pkg/ecoguard.css"/>
        <Title text="EcoGuard"/>

        <Router>
            <div class="app-shell">
                <Navbar/>
                <main class="app-shell__main">
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=|| view! { <Redirect path=LOGIN_PATH/> }/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                        <Route path=StaticSegment("impact") view=ImpactPage/>
                        <Route
                            path=StaticSegment("donate")
                            view=|| view! { <RequireAuth><DonationPage/></RequireAuth> }
                        />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
