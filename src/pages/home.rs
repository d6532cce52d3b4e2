use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use yew::prelude::*;
use yew_router::components::Link;

use crate::components::analytics::AnalyticsSection;
use crate::components::cta::CtaSection;
use crate::components::pricing::PricingSection;
use crate::components::testimonials::TestimonialsSection;
use crate::components::video_hero::VideoHero;
use crate::utils::scroll;
use crate::Route;

const HERO_ID: &str = "hero";

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    accent: &'static str,
}

const FEATURES: [Feature; 3] = [
    Feature {
        icon: "fas fa-globe",
        title: "Global Infrastructure",
        description: "Deploy worldwide with our enterprise-grade infrastructure",
        accent: "accent-blue",
    },
    Feature {
        icon: "fas fa-shield-halved",
        title: "Enterprise Security",
        description: "Bank-grade security with advanced encryption",
        accent: "accent-purple",
    },
    Feature {
        icon: "fas fa-bolt",
        title: "Lightning Fast",
        description: "Optimized performance with sub-second response times",
        accent: "accent-amber",
    },
];

struct Stat {
    value: &'static str,
    label: &'static str,
}

const STATS: [Stat; 4] = [
    Stat { value: "99.99%", label: "Uptime" },
    Stat { value: "150+", label: "Countries" },
    Stat { value: "10ms", label: "Latency" },
    Stat { value: "24/7", label: "Support" },
];

#[function_component(Home)]
pub fn home() -> Html {
    let hero_progress = use_state(|| 0.0_f64);

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

    // Track how far the hero has scrolled past the viewport top. Both scroll
    // and resize move the hero's rect, so both resample it; there is no timer.
    {
        let hero_progress = hero_progress.clone();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = if let Some(window) = web_sys::window() {
                    let callback = Closure::<dyn Fn()>::new({
                        let hero_progress = hero_progress.clone();
                        move || {
                            if let Some(hero) = web_sys::window()
                                .and_then(|w| w.document())
                                .and_then(|d| d.get_element_by_id(HERO_ID))
                            {
                                let rect = hero.get_bounding_client_rect();
                                hero_progress.set(scroll::scroll_progress(rect.top(), rect.height()));
                            }
                        }
                    });
                    window
                        .add_event_listener_with_callback(
                            "scroll",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    window
                        .add_event_listener_with_callback(
                            "resize",
                            callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                    // Initial call
                    if let Some(hero) = window
                        .document()
                        .and_then(|d| d.get_element_by_id(HERO_ID))
                    {
                        let rect = hero.get_bounding_client_rect();
                        hero_progress.set(scroll::scroll_progress(rect.top(), rect.height()));
                    }
                    Box::new(move || {
                        if let Some(win) = web_sys::window() {
                            let _ = win.remove_event_listener_with_callback(
                                "scroll",
                                callback.as_ref().unchecked_ref(),
                            );
                            let _ = win.remove_event_listener_with_callback(
                                "resize",
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    })
                } else {
                    Box::new(|| ())
                };
                move || {
                    destructor();
                }
            },
            (),
        );
    }

    let shift = scroll::parallax_shift(*hero_progress);
    let fade = scroll::overlay_opacity(*hero_progress);

    html! {
        <>
            <section id={HERO_ID} class="hero">
                <div
                    class="hero-background"
                    style={format!("transform: translateY({shift}%); opacity: {fade};")}
                >
                    <div class="hero-gradient"></div>
                    <div class="hero-grid-overlay"></div>
                </div>
                <div class="hero-content">
                    <span class="hero-badge">
                        <i class="fas fa-wand-magic-sparkles"></i>
                        {"Trusted by 10,000+ companies worldwide"}
                    </span>
                    <h1 class="hero-title">
                        {"The Future of"}
                        <br/>
                        <span class="hero-title-accent">{"Business Operations"}</span>
                    </h1>
                    <p class="hero-subtitle">
                        {"Transform your business with AI-powered automation, real-time analytics, and enterprise-grade security."}
                    </p>
                    <div class="hero-cta-group">
                        <Link<Route> to={Route::Signup} classes="forward-link">
                            <button class="hero-cta">
                                {"Start free trial"}
                                <i class="fas fa-arrow-right"></i>
                            </button>
                        </Link<Route>>
                        <Link<Route> to={Route::Pricing} classes="forward-link">
                            <button class="hero-cta outline">{"Book a demo"}</button>
                        </Link<Route>>
                    </div>
                    <p class="hero-disclaimer">{"No credit card required · 14-day free trial · Cancel anytime"}</p>
                    <div class="hero-stats">
                        { for STATS.iter().enumerate().map(|(index, stat)| html! {
                            <div class="stat" style={format!("animation-delay: {}ms;", 400 + index * 100)}>
                                <div class="stat-value">{stat.value}</div>
                                <div class="stat-label">{stat.label}</div>
                            </div>
                        })}
                    </div>
                </div>
            </section>

            <section class="features-section">
                <div class="section-intro">
                    <h2>{"Built for the Future"}</h2>
                    <p>{"Experience cutting-edge technology that scales with your business"}</p>
                </div>
                <div class="features-grid">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="feature-card">
                            <div class={classes!("feature-icon", feature.accent)}>
                                <i class={feature.icon}></i>
                            </div>
                            <h3>{feature.title}</h3>
                            <p>{feature.description}</p>
                        </div>
                    })}
                </div>
            </section>

            <AnalyticsSection />
            <VideoHero />
            <TestimonialsSection />
            <PricingSection />
            <CtaSection />
        </>
    }
}
