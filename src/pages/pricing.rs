use yew::prelude::*;

use crate::components::cta::CtaSection;
use crate::components::pricing::PricingSection;

#[function_component(PricingPage)]
pub fn pricing_page() -> Html {
    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    html! {
        <div class="page">
            <section class="page-hero">
                <h1>{"Pricing"}</h1>
                <p>{"One platform, three plans. Upgrade, downgrade or cancel whenever you like."}</p>
            </section>
            <PricingSection />
            <CtaSection />
        </div>
    }
}
