//! Donation page: preset tiers, frequency picker, and the donation form.

use leptos::prelude::*;

use crate::components::donation_form::DonationForm;
use crate::net::types::Frequency;
use crate::state::donation::{DonationSelection, PRESET_AMOUNTS};

struct Reason {
    icon: &'static str,
    icon_label: &'static str,
    title: &'static str,
    body: &'static str,
}

const REASONS: [Reason; 3] = [
    Reason {
        icon: "🔔",
        icon_label: "bell",
        title: "Immediate Action",
        body: "Your support helps us take immediate action against environmental degradation",
    },
    Reason {
        icon: "🛡️",
        icon_label: "shield",
        title: "Transparent Impact",
        body: "Track your contribution's direct impact on environmental projects",
    },
    Reason {
        icon: "🌍",
        icon_label: "globe",
        title: "Global Community",
        body: "Join thousands of environmental defenders worldwide",
    },
];

#[component]
pub fn DonationPage() -> impl IntoView {
    let selection = RwSignal::new(DonationSelection::default());
    let amount = Signal::derive(move || selection.with(|s| s.amount));
    let frequency = Signal::derive(move || selection.with(|s| s.frequency));

    view! {
        <div class="donate-page">
            <header class="donate-page__hero">
                <h1>"Protect Our Planet's Future"</h1>
                <p>
                    "Your recurring donation helps us combat environmental degradation and preserve our planet for future generations."
                </p>
            </header>

            <div class="donate-page__grid">
                <section>
                    <div class="donate-page__tiers">
                        {PRESET_AMOUNTS
                            .into_iter()
                            .map(|preset| {
                                view! {
                                    <button
                                        type="button"
                                        class=move || {
                                            if selection.with(|s| s.is_amount_selected(preset.amount)) {
                                                "tier tier--selected"
                                            } else {
                                                "tier"
                                            }
                                        }
                                        on:click=move |_| {
                                            selection.update(|s| {
                                                s.select_amount(preset.amount);
                                            });
                                        }
                                    >
                                        <div class="tier__amount">{format!("${}", preset.amount)}</div>
                                        <div class="tier__description">{preset.description}</div>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="donate-page__frequency">
                        <h3>"Donation Frequency"</h3>
                        <div class="frequency-picker">
                            {Frequency::ALL
                                .into_iter()
                                .map(|freq| {
                                    view! {
                                        <button
                                            type="button"
                                            class=move || {
                                                if selection.with(|s| s.is_frequency_selected(freq)) {
                                                    "frequency-picker__option frequency-picker__option--selected"
                                                } else {
                                                    "frequency-picker__option"
                                                }
                                            }
                                            aria-pressed=move || selection.with(|s| s.is_frequency_selected(freq)).to_string()
                                            on:click=move |_| selection.update(|s| s.select_frequency(freq))
                                        >
                                            {freq.label()}
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>

                    <DonationForm amount=amount frequency=frequency/>
                </section>

                <aside class="donate-page__reasons">
                    <h2>"Why Support Environmental Conservation?"</h2>
                    {REASONS
                        .iter()
                        .map(|reason| {
                            view! {
                                <div class="reason">
                                    <div class="reason__icon">
                                        <span role="img" aria-label=reason.icon_label>{reason.icon}</span>
                                    </div>
                                    <div>
                                        <h3>{reason.title}</h3>
                                        <p>{reason.body}</p>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </aside>
            </div>
        </div>
    }
}
