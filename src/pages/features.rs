use yew::prelude::*;
use yew_router::components::Link;

use crate::components::analytics::AnalyticsSection;
use crate::components::cta::CtaSection;
use crate::Route;

struct Capability {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const ANALYTICS_CAPABILITIES: [Capability; 3] = [
    Capability {
        icon: "fas fa-chart-line",
        title: "Live Dashboards",
        description: "Every metric updates the moment it changes, no refresh button anywhere.",
    },
    Capability {
        icon: "fas fa-filter",
        title: "Custom Reports",
        description: "Slice revenue, retention and usage by any dimension your team cares about.",
    },
    Capability {
        icon: "fas fa-bell",
        title: "Smart Alerts",
        description: "Get notified when a number moves before your customers notice it did.",
    },
];

const COLLABORATION_CAPABILITIES: [Capability; 3] = [
    Capability {
        icon: "fas fa-users",
        title: "Shared Workspaces",
        description: "Projects, docs and dashboards live in one place your whole team can see.",
    },
    Capability {
        icon: "fas fa-comments",
        title: "Threaded Comments",
        description: "Discuss the work next to the work, with full context and history.",
    },
    Capability {
        icon: "fas fa-user-check",
        title: "Roles & Permissions",
        description: "Give every teammate exactly the access they need and nothing more.",
    },
];

const SECURITY_CAPABILITIES: [Capability; 3] = [
    Capability {
        icon: "fas fa-lock",
        title: "Encryption Everywhere",
        description: "Data is encrypted in transit and at rest with keys rotated automatically.",
    },
    Capability {
        icon: "fas fa-key",
        title: "SSO & SCIM",
        description: "Plug into your identity provider for sign-on and automatic provisioning.",
    },
    Capability {
        icon: "fas fa-clipboard-list",
        title: "Audit Logs",
        description: "Every sensitive action is recorded and exportable for your compliance team.",
    },
];

fn capability_grid(capabilities: &'static [Capability]) -> Html {
    html! {
        <div class="features-grid">
            { for capabilities.iter().map(|capability| html! {
                <div class="feature-card">
                    <div class="feature-icon accent-purple">
                        <i class={capability.icon}></i>
                    </div>
                    <h3>{capability.title}</h3>
                    <p>{capability.description}</p>
                </div>
            })}
        </div>
    }
}

fn feature_page(title: &'static str, subtitle: &'static str, body: Html) -> Html {
    html! {
        <div class="page">
            <section class="page-hero">
                <h1>{title}</h1>
                <p>{subtitle}</p>
            </section>
            {body}
            <section class="feature-page-cta">
                <Link<Route> to={Route::Signup} classes="forward-link">
                    <button class="hero-cta">
                        {"Start free trial"}
                        <i class="fas fa-arrow-right"></i>
                    </button>
                </Link<Route>>
            </section>
            <CtaSection />
        </div>
    }
}

#[function_component(AnalyticsFeature)]
pub fn analytics_feature() -> Html {
    feature_page(
        "Analytics",
        "See what your business is doing while it is doing it.",
        html! {
            <>
                <AnalyticsSection />
                { capability_grid(&ANALYTICS_CAPABILITIES) }
            </>
        },
    )
}

#[function_component(CollaborationFeature)]
pub fn collaboration_feature() -> Html {
    feature_page(
        "Collaboration",
        "Bring every team into the same workspace.",
        capability_grid(&COLLABORATION_CAPABILITIES),
    )
}

#[function_component(SecurityFeature)]
pub fn security_feature() -> Html {
    feature_page(
        "Security",
        "Enterprise-grade protection on every plan.",
        capability_grid(&SECURITY_CAPABILITIES),
    )
}
