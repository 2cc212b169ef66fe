//! Static "Impact" page rendered from a fixed metrics table.

use leptos::prelude::*;

struct ImpactMetric {
    value: &'static str,
    label: &'static str,
}

const METRICS: [ImpactMetric; 4] = [
    ImpactMetric { value: "120,000", label: "Trees planted" },
    ImpactMetric { value: "3,400", label: "Acres of rainforest protected" },
    ImpactMetric { value: "58", label: "Water conservation projects funded" },
    ImpactMetric { value: "27", label: "Wildlife sanctuaries supported" },
];

#[component]
pub fn ImpactPage() -> impl IntoView {
    view! {
        <div class="info-page">
            <h1>"Our Impact"</h1>
            <p>"Every recurring donation goes directly to vetted environmental projects."</p>
            <div class="impact-grid">
                {METRICS
                    .iter()
                    .map(|metric| {
                        view! {
                            <div class="impact-grid__card">
                                <div class="impact-grid__value">{metric.value}</div>
                                <div class="impact-grid__label">{metric.label}</div>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
