use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="page not-found">
            <h1>{"404"}</h1>
            <p>{"This page does not exist."}</p>
            <Link<Route> to={Route::Home} classes="forward-link">
                <button class="hero-cta">{"Back to home"}</button>
            </Link<Route>>
        </div>
    }
}
