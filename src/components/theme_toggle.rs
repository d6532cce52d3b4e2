use web_sys::{window, MouseEvent};
use yew::prelude::*;

const STORAGE_KEY: &str = "theme";
const LIGHT_CLASS: &str = "light-theme";

fn stored_theme() -> Option<String> {
    window()
        .and_then(|w| w.local_storage().ok())
        .flatten()
        .and_then(|storage| storage.get_item(STORAGE_KEY).ok())
        .flatten()
}

/// Dark is the default; only an explicit stored "light" switches away.
fn theme_is_light(stored: Option<&str>) -> bool {
    stored == Some("light")
}

/// Current preference as persisted, independent of any component state.
pub fn currently_light() -> bool {
    theme_is_light(stored_theme().as_deref())
}

pub fn apply_theme(light: bool) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let class_list = body.class_list();
        if light {
            let _ = class_list.add_1(LIGHT_CLASS);
        } else {
            let _ = class_list.remove_1(LIGHT_CLASS);
        }
    }
}

pub fn persist_theme(light: bool) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok()).flatten() {
        let value = if light { "light" } else { "dark" };
        if storage.set_item(STORAGE_KEY, value).is_err() {
            log::warn!("could not persist theme preference");
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    pub light: bool,
    pub on_toggle: Callback<MouseEvent>,
}

/// Dark/light switch. The navbar owns the flag and mounts one toggle per
/// breakpoint, so both buttons always show the same icon. The choice is kept
/// in localStorage and applied as a class on `<body>` so the stylesheet can
/// restyle everything without a rerender.
#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    html! {
        <button
            class="theme-toggle"
            onclick={props.on_toggle.clone()}
            aria-label="Toggle color theme"
        >
            if props.light {
                <i class="fas fa-moon"></i>
            } else {
                <i class="fas fa-sun"></i>
            }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::theme_is_light;

    #[test]
    fn dark_is_the_default_without_a_stored_preference() {
        assert!(!theme_is_light(None));
    }

    #[test]
    fn only_an_explicit_light_preference_switches_themes() {
        assert!(theme_is_light(Some("light")));
        assert!(!theme_is_light(Some("dark")));
        assert!(
            !theme_is_light(Some("auto")),
            "unknown stored values fall back to dark"
        );
    }
}
