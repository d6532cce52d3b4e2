use yew::prelude::*;

use crate::components::analytics::AnalyticsSection;

/// Demo of the in-app view the navbar switches into. Reuses the marketing
/// metrics band as placeholder content.
#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    html! {
        <div class="page">
            <section class="page-hero">
                <h1>{"Dashboard"}</h1>
                <p>{"A preview of the BoltSaaS workspace."}</p>
            </section>
            <AnalyticsSection />
        </div>
    }
}
