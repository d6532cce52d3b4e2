use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

struct Plan {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    best_for: &'static str,
    features: &'static [&'static str],
    cta: &'static str,
    is_popular: bool,
}

const PLANS: [Plan; 3] = [
    Plan {
        name: "Starter",
        price: "$29",
        period: "/month",
        best_for: "For small teams getting started",
        features: &[
            "Up to 5 team members",
            "Core analytics dashboard",
            "10GB storage",
            "Email support",
        ],
        cta: "Start free trial",
        is_popular: false,
    },
    Plan {
        name: "Pro",
        price: "$99",
        period: "/month",
        best_for: "For growing companies that need scale",
        features: &[
            "Up to 25 team members",
            "Real-time analytics and reports",
            "100GB storage",
            "Custom integrations",
            "Priority support",
        ],
        cta: "Start free trial",
        is_popular: true,
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        period: "",
        best_for: "For organizations with advanced needs",
        features: &[
            "Unlimited team members",
            "Dedicated account manager",
            "Unlimited storage",
            "SSO and audit logs",
            "99.99% uptime SLA",
        ],
        cta: "Talk to sales",
        is_popular: false,
    },
];

#[derive(Properties, PartialEq)]
struct PlanCardProps {
    name: &'static str,
    price: &'static str,
    period: &'static str,
    best_for: &'static str,
    features: &'static [&'static str],
    cta: &'static str,
    is_popular: bool,
}

#[function_component(PlanCard)]
fn plan_card(props: &PlanCardProps) -> Html {
    let navigator = use_navigator().unwrap();

    let onclick = {
        let cta = props.cta;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if cta == "Talk to sales" {
                if let Some(window) = web_sys::window() {
                    let _ = window
                        .location()
                        .set_href(&format!("mailto:{}", crate::config::get_sales_email()));
                }
            } else {
                navigator.push(&Route::Signup);
            }
        })
    };

    html! {
        <div class={classes!("plan-card", props.is_popular.then_some("popular"))}>
            if props.is_popular {
                <span class="plan-badge">{"Most popular"}</span>
            }
            <h3 class="plan-name">{props.name}</h3>
            <p class="plan-best-for">{props.best_for}</p>
            <div class="plan-price">
                <span class="amount">{props.price}</span>
                <span class="period">{props.period}</span>
            </div>
            <ul class="plan-features">
                { for props.features.iter().map(|feature| html! {
                    <li><i class="fas fa-check"></i>{*feature}</li>
                })}
            </ul>
            <button class="plan-cta" {onclick}><b>{props.cta}</b></button>
        </div>
    }
}

#[function_component(PricingSection)]
pub fn pricing_section() -> Html {
    let pricing_css = r#"
    .pricing-section {
        padding: 6rem 2rem;
        max-width: 1200px;
        margin: 0 auto;
    }
    .pricing-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
        gap: 2rem;
        align-items: stretch;
    }
    .plan-card {
        position: relative;
        display: flex;
        flex-direction: column;
        background: var(--card-bg);
        border: 1px solid var(--card-border);
        border-radius: 16px;
        padding: 2rem;
        transition: all 0.3s ease;
    }
    .plan-card:hover {
        transform: translateY(-4px);
        border-color: var(--accent-soft);
    }
    .plan-card.popular {
        border-color: var(--accent);
        box-shadow: 0 0 30px rgba(168, 85, 247, 0.15);
    }
    .plan-badge {
        position: absolute;
        top: -12px;
        left: 50%;
        transform: translateX(-50%);
        background: linear-gradient(45deg, #a855f7, #d8b4fe);
        color: #1a002e;
        font-size: 0.75rem;
        font-weight: 700;
        padding: 0.25rem 0.85rem;
        border-radius: 999px;
        white-space: nowrap;
    }
    .plan-name {
        margin: 0 0 0.25rem 0;
        font-size: 1.4rem;
    }
    .plan-best-for {
        color: var(--text-muted);
        font-size: 0.9rem;
        margin: 0 0 1.5rem 0;
    }
    .plan-price .amount {
        font-size: 2.5rem;
        font-weight: 700;
    }
    .plan-price .period {
        color: var(--text-muted);
    }
    .plan-features {
        list-style: none;
        padding: 0;
        margin: 1.5rem 0 2rem 0;
        flex-grow: 1;
    }
    .plan-features li {
        display: flex;
        align-items: center;
        gap: 0.65rem;
        padding: 0.4rem 0;
        color: var(--text-muted);
    }
    .plan-features li i {
        color: #34d399;
        font-size: 0.85rem;
    }
    .plan-cta {
        background: linear-gradient(45deg, #7e22ce, #a855f7);
        color: white;
        border: 1px solid rgba(255, 255, 255, 0.1);
        padding: 1rem 2rem;
        border-radius: 8px;
        font-size: 1rem;
        cursor: pointer;
        transition: all 0.3s ease;
        width: 100%;
    }
    .plan-cta:hover {
        transform: translateY(-2px);
        box-shadow: 0 4px 20px rgba(168, 85, 247, 0.3);
    }
    "#;

    html! {
        <section class="pricing-section" id="pricing">
            <style>{pricing_css}</style>
            <div class="section-intro">
                <h2>{"Simple, Transparent Pricing"}</h2>
                <p>{"Every plan starts with a 14-day free trial. No credit card required."}</p>
            </div>
            <div class="pricing-grid">
                { for PLANS.iter().map(|plan| html! {
                    <PlanCard
                        name={plan.name}
                        price={plan.price}
                        period={plan.period}
                        best_for={plan.best_for}
                        features={plan.features}
                        cta={plan.cta}
                        is_popular={plan.is_popular}
                    />
                })}
            </div>
        </section>
    }
}
