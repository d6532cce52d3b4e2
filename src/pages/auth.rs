use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

// Static previews only. The marketing site ships without a backend, so these
// forms are not wired to anything.

#[function_component(Login)]
pub fn login() -> Html {
    html! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{"Welcome back"}</h1>
                <p class="auth-subtitle">{"Log in to your BoltSaaS workspace"}</p>
                <label for="login-email">{"Email"}</label>
                <input id="login-email" type="email" placeholder="you@company.com" />
                <label for="login-password">{"Password"}</label>
                <input id="login-password" type="password" placeholder="••••••••" />
                <button class="hero-cta auth-submit"><b>{"Login"}</b></button>
                <p class="auth-switch">
                    {"Don't have an account? "}
                    <Link<Route> to={Route::Signup}>{"Sign up"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}

#[function_component(Signup)]
pub fn signup() -> Html {
    html! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>{"Start your free trial"}</h1>
                <p class="auth-subtitle">{"14 days free. No credit card required."}</p>
                <label for="signup-name">{"Company name"}</label>
                <input id="signup-name" type="text" placeholder="Acme Inc." />
                <label for="signup-email">{"Work email"}</label>
                <input id="signup-email" type="email" placeholder="you@company.com" />
                <label for="signup-password">{"Password"}</label>
                <input id="signup-password" type="password" placeholder="At least 8 characters" />
                <button class="hero-cta auth-submit"><b>{"Get Started"}</b></button>
                <p class="auth-switch">
                    {"Already have an account? "}
                    <Link<Route> to={Route::Login}>{"Login"}</Link<Route>>
                </p>
            </div>
        </div>
    }
}
