use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::theme_toggle::{apply_theme, currently_light, persist_theme, ThemeToggle};
use crate::Route;

struct MenuItem {
    route: Route,
    label: &'static str,
}

const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem { route: Route::FeatureAnalytics, label: "Analytics" },
    MenuItem { route: Route::FeatureCollaboration, label: "Collaboration" },
    MenuItem { route: Route::FeatureSecurity, label: "Security" },
    MenuItem { route: Route::Pricing, label: "Pricing" },
];

/// Fixed top bar. Product links and auth buttons disappear on the auth pages
/// and collapse to a single dashboard link inside the app shell, matching the
/// current route. Also owns the theme flag, since it mounts one toggle per
/// breakpoint and both must show the same icon.
#[function_component(Navbar)]
pub fn navbar() -> Html {
    let route = use_route::<Route>();
    let menu_open = use_state(|| false);
    let light_theme = use_state(currently_light);

    let is_auth_page = matches!(route, Some(Route::Login) | Some(Route::Signup));
    let is_dashboard = matches!(route, Some(Route::Dashboard));

    use_effect_with_deps(
        move |_| {
            apply_theme(currently_light());
            || ()
        },
        (), // Empty dependencies array means this effect runs only once on mount
    );

    // Links inside the mobile menu close it on click, but browser back and
    // forward navigation changes the route without a click. Close the menu on
    // any route change.
    {
        let menu_open = menu_open.clone();
        use_effect_with_deps(
            move |_| {
                if *menu_open {
                    menu_open.set(false);
                }
                || ()
            },
            route,
        );
    }

    let toggle_theme = {
        let light_theme = light_theme.clone();
        Callback::from(move |_: MouseEvent| {
            // localStorage is the source of truth; the hook state only
            // drives the icons.
            let next = !currently_light();
            persist_theme(next);
            apply_theme(next);
            light_theme.set(next);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let desktop_links = if is_auth_page || is_dashboard {
        html! {}
    } else {
        html! {
            <>
                { for MENU_ITEMS.iter().map(|item| {
                    let active = route == Some(item.route);
                    html! {
                        <Link<Route> to={item.route} classes={classes!("nav-link", active.then_some("active"))}>
                            {item.label}
                        </Link<Route>>
                    }
                })}
            </>
        }
    };

    let account_links = if is_dashboard {
        html! {
            <Link<Route> to={Route::Home} classes="nav-link">{"Back to site"}</Link<Route>>
        }
    } else if is_auth_page {
        html! {}
    } else {
        html! {
            <>
                <Link<Route> to={Route::Login} classes="nav-link">{"Login"}</Link<Route>>
                <Link<Route> to={Route::Signup} classes="forward-link">
                    <button class="nav-cta">{"Get Started"}</button>
                </Link<Route>>
            </>
        }
    };

    html! {
        <nav class="navbar">
            <div class="navbar-inner">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <i class="fas fa-bolt"></i>
                    {"BoltSaaS"}
                </Link<Route>>

                <div class="nav-links">
                    {desktop_links}
                    <ThemeToggle light={*light_theme} on_toggle={toggle_theme.clone()} />
                    {account_links}
                </div>

                <div class="nav-mobile">
                    <ThemeToggle light={*light_theme} on_toggle={toggle_theme} />
                    if !is_auth_page && !is_dashboard {
                        <button class="nav-burger" onclick={toggle_menu} aria-label="Toggle navigation menu">
                            if *menu_open {
                                <i class="fas fa-xmark"></i>
                            } else {
                                <i class="fas fa-bars"></i>
                            }
                        </button>
                    }
                </div>
            </div>

            if *menu_open && !is_auth_page && !is_dashboard {
                <div class="mobile-menu" onclick={close_menu}>
                    { for MENU_ITEMS.iter().map(|item| html! {
                        <Link<Route> to={item.route} classes="mobile-link">{item.label}</Link<Route>>
                    })}
                    <Link<Route> to={Route::Login} classes="mobile-link">{"Login"}</Link<Route>>
                    <Link<Route> to={Route::Signup} classes="mobile-link accent">{"Get Started"}</Link<Route>>
                </div>
            }
        </nav>
    }
}
