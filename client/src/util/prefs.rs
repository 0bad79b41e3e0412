//! Persisted theme and language preferences.
//!
//! Preferences live in `localStorage`. Applying a preference writes an
//! attribute on the `<html>` element: `data-theme` for the theme, `lang` for
//! the locale. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is best-effort browser-only behavior; SSR and native paths
//! return defaults and no-op writes to keep rendering deterministic.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use crate::i18n::Locale;
use crate::state::ui::UiState;

#[cfg(feature = "hydrate")]
const DARK_KEY: &str = "authgate_dark";
#[cfg(feature = "hydrate")]
const LOCALE_KEY: &str = "authgate_locale";

#[cfg(feature = "hydrate")]
fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(feature = "hydrate")]
fn set_root_attribute(name: &str, value: &str) {
    if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
        let _ = el.set_attribute(name, value);
    }
}

/// Whether dark mode is preferred.
///
/// A stored choice wins; otherwise the system color scheme decides.
pub fn read_dark_mode() -> bool {
    #[cfg(feature = "hydrate")]
    {
        if let Some(val) = storage().and_then(|s| s.get_item(DARK_KEY).ok().flatten()) {
            return val == "true";
        }
        web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Stored locale, or [`Locale::default`] when none (or an unknown code) is stored.
pub fn read_locale() -> Locale {
    #[cfg(feature = "hydrate")]
    {
        storage()
            .and_then(|s| s.get_item(LOCALE_KEY).ok().flatten())
            .and_then(|code| Locale::from_code(&code))
            .unwrap_or_default()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Locale::default()
    }
}

/// Initial UI state from stored preferences.
pub fn load() -> UiState {
    UiState { locale: read_locale(), dark_mode: read_dark_mode() }
}

/// Reflect both preferences onto the document.
pub fn apply(state: UiState) {
    #[cfg(feature = "hydrate")]
    {
        set_root_attribute("data-theme", if state.dark_mode { "dark" } else { "light" });
        set_root_attribute("lang", state.locale.code());
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = state;
    }
}

/// Flip dark mode, apply and persist it, and return the new state.
pub fn toggle_dark_mode(state: UiState) -> UiState {
    let next = UiState { dark_mode: !state.dark_mode, ..state };
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(s) = storage() {
            let _ = s.set_item(DARK_KEY, if next.dark_mode { "true" } else { "false" });
        }
    }
    next
}

/// Switch to the other locale, apply and persist it, and return the new state.
pub fn toggle_locale(state: UiState) -> UiState {
    let next = UiState { locale: state.locale.toggle(), ..state };
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        if let Some(s) = storage() {
            let _ = s.set_item(LOCALE_KEY, next.locale.code());
        }
    }
    next
}
