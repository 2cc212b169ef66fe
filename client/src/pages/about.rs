//! Static "About" page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <h1>"About EcoGuard"</h1>
            <p>
                "EcoGuard connects donors with environmental organizations working on reforestation, "
                "water conservation, and wildlife protection."
            </p>
            <h2>"How it works"</h2>
            <ol class="info-page__steps">
                <li>"Organizations apply and are reviewed by our team."</li>
                <li>"Donors choose a recurring contribution and a payment method."</li>
                <li>"Organizations post stories so donors can follow the impact of their support."</li>
            </ol>
            <p>
                <a href="/donate" class="btn">"Start donating"</a>
            </p>
        </div>
    }
}
