use chrono::{Datelike, Local};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

struct FooterLink {
    route: Route,
    label: &'static str,
}

const PRODUCT_LINKS: [FooterLink; 4] = [
    FooterLink { route: Route::FeatureAnalytics, label: "Analytics" },
    FooterLink { route: Route::FeatureCollaboration, label: "Collaboration" },
    FooterLink { route: Route::FeatureSecurity, label: "Security" },
    FooterLink { route: Route::Pricing, label: "Pricing" },
];

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <div class="footer-columns">
                <div class="footer-brand">
                    <span class="nav-logo"><i class="fas fa-bolt"></i>{"BoltSaaS"}</span>
                    <p>{"The operations platform for companies building the future."}</p>
                    <div class="footer-social">
                        <a href="https://twitter.com/boltsaas" target="_blank" rel="noopener noreferrer" aria-label="Twitter">
                            <i class="fab fa-twitter"></i>
                        </a>
                        <a href="https://github.com/boltsaas" target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                            <i class="fab fa-github"></i>
                        </a>
                        <a href="https://linkedin.com/company/boltsaas" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                            <i class="fab fa-linkedin"></i>
                        </a>
                    </div>
                </div>
                <div class="footer-column">
                    <h4>{"Product"}</h4>
                    { for PRODUCT_LINKS.iter().map(|link| html! {
                        <Link<Route> to={link.route}>{link.label}</Link<Route>>
                    })}
                </div>
                <div class="footer-column">
                    <h4>{"Get started"}</h4>
                    <Link<Route> to={Route::Signup}>{"Start free trial"}</Link<Route>>
                    <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                    <a href={format!("mailto:{}", crate::config::get_sales_email())}>{"Talk to sales"}</a>
                </div>
            </div>
            <div class="footer-bottom">
                <p>{format!("© {} BoltSaaS. All rights reserved.", year)}</p>
            </div>
        </footer>
    }
}
