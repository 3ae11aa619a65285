use web_sys::{window, Storage};
use yew::prelude::*;

use crate::ripple::use_ripples;

const THEME_KEY: &str = "theme";
const DARK_CLASS: &str = "dark";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "🌙",
            Self::Dark => "☀️",
        }
    }

    pub fn toggle_label(self) -> String {
        format!("Cambiar a tema {}", self.toggled().as_str())
    }
}

fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok().flatten()
}

/// Stored preference, or light mode for anything absent or unrecognized.
pub fn read_stored_theme() -> Theme {
    local_storage()
        .and_then(|storage| storage.get_item(THEME_KEY).ok().flatten())
        .and_then(|value| Theme::from_str(&value))
        .unwrap_or(Theme::Light)
}

pub fn persist_theme(theme: Theme) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(THEME_KEY, theme.as_str());
    }
}

/// Toggles the `dark` marker class on the document root.
pub fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let class_list = root.class_list();
        let _ = match theme {
            Theme::Dark => class_list.add_1(DARK_CLASS),
            Theme::Light => class_list.remove_1(DARK_CLASS),
        };
    }
}

#[function_component(ThemeToggle)]
pub fn theme_toggle() -> Html {
    let theme = use_state(read_stored_theme);
    let (ripple, overlay) = use_ripples();

    {
        let current = *theme;
        use_effect_with(current, move |&theme| {
            apply_theme(theme);
            || ()
        });
    }

    let onclick = {
        let theme = theme.clone();
        Callback::from(move |event: MouseEvent| {
            ripple.emit(event);
            let next = (*theme).toggled();
            persist_theme(next);
            theme.set(next);
        })
    };

    html! {
        <button
            type="button"
            class="theme-toggle relative overflow-hidden text-2xl"
            aria-label={(*theme).toggle_label()}
            onclick={onclick}
        >
            { (*theme).icon() }
            { overlay }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_accepts_only_exact_values() {
        assert_eq!(Theme::from_str("dark"), Some(Theme::Dark));
        assert_eq!(Theme::from_str("light"), Some(Theme::Light));
        assert_eq!(Theme::from_str("Dark"), None);
        assert_eq!(Theme::from_str(""), None);
    }

    #[test]
    fn toggled_twice_is_identity() {
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn apply_sets_and_clears_root_marker() {
        let root = window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .unwrap();

        apply_theme(Theme::Dark);
        assert!(root.class_list().contains(DARK_CLASS));

        apply_theme(Theme::Light);
        assert!(!root.class_list().contains(DARK_CLASS));
    }

    #[wasm_bindgen_test]
    fn persisted_theme_round_trips() {
        persist_theme(Theme::Dark);
        assert_eq!(read_stored_theme(), Theme::Dark);

        persist_theme(Theme::Light);
        assert_eq!(read_stored_theme(), Theme::Light);
    }
}
