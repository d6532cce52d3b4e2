use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod components {
    pub mod analytics;
    pub mod cta;
    pub mod footer;
    pub mod navbar;
    pub mod pricing;
    pub mod testimonials;
    pub mod theme_toggle;
    pub mod video_hero;
}
mod pages {
    pub mod auth;
    pub mod dashboard;
    pub mod features;
    pub mod home;
    pub mod not_found;
    pub mod pricing;
}
mod utils {
    pub mod playback;
    pub mod scroll;
}

use components::footer::Footer;
use components::navbar::Navbar;
use pages::auth::{Login, Signup};
use pages::dashboard::Dashboard;
use pages::features::{AnalyticsFeature, CollaborationFeature, SecurityFeature};
use pages::home::Home;
use pages::not_found::NotFound;
use pages::pricing::PricingPage;

#[derive(Clone, Copy, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/features/analytics")]
    FeatureAnalytics,
    #[at("/features/collaboration")]
    FeatureCollaboration,
    #[at("/features/security")]
    FeatureSecurity,
    #[at("/pricing")]
    Pricing,
    #[at("/login")]
    Login,
    #[at("/signup")]
    Signup,
    #[at("/dashboard")]
    Dashboard,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::FeatureAnalytics => html! { <AnalyticsFeature /> },
        Route::FeatureCollaboration => html! { <CollaborationFeature /> },
        Route::FeatureSecurity => html! { <SecurityFeature /> },
        Route::Pricing => html! { <PricingPage /> },
        Route::Login => html! { <Login /> },
        Route::Signup => html! { <Signup /> },
        Route::Dashboard => html! { <Dashboard /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Navbar />
            <main>
                <Switch<Route> render={switch} />
            </main>
            <Footer />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("boltsaas landing page starting");
    yew::Renderer::<App>::new().render();
}
