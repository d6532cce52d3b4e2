use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[function_component(CtaSection)]
pub fn cta_section() -> Html {
    let cta_css = r#"
    .cta-section {
        padding: 6rem 2rem;
    }
    .cta-banner {
        max-width: 900px;
        margin: 0 auto;
        text-align: center;
        padding: 4rem 2rem;
        border-radius: 24px;
        background: linear-gradient(135deg, rgba(126, 34, 206, 0.35), rgba(88, 28, 135, 0.15));
        border: 1px solid rgba(168, 85, 247, 0.3);
    }
    .cta-banner h2 {
        font-size: 2.5rem;
        margin: 0 0 1rem 0;
    }
    .cta-banner > p {
        color: var(--text-muted);
        font-size: 1.1rem;
        margin: 0 0 2rem 0;
    }
    .cta-actions {
        display: flex;
        gap: 1rem;
        justify-content: center;
        flex-wrap: wrap;
    }
    .cta-secondary {
        display: inline-flex;
        align-items: center;
        padding: 1rem 2rem;
        border-radius: 8px;
        border: 1px solid rgba(255, 255, 255, 0.3);
        color: var(--text);
        text-decoration: none;
        transition: all 0.3s ease;
    }
    .cta-secondary:hover {
        background: rgba(255, 255, 255, 0.1);
    }
    .cta-disclaimer {
        color: var(--text-muted);
        font-size: 0.9rem;
        margin-top: 1.5rem;
    }
    "#;

    html! {
        <section class="cta-section">
            <style>{cta_css}</style>
            <div class="cta-banner">
                <h2>{"Ready to Transform Your Business?"}</h2>
                <p>{"Join 10,000+ companies already running their operations on BoltSaaS."}</p>
                <div class="cta-actions">
                    <Link<Route> to={Route::Signup} classes="forward-link">
                        <button class="hero-cta">
                            {"Start free trial"}
                            <i class="fas fa-arrow-right"></i>
                        </button>
                    </Link<Route>>
                    <a class="cta-secondary" href={format!("mailto:{}", config::get_sales_email())}>
                        {"Book a demo"}
                    </a>
                </div>
                <p class="cta-disclaimer">{"No credit card required · 14-day free trial · Cancel anytime"}</p>
            </div>
        </section>
    }
}
