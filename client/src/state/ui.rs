//! Presentation preferences: language and color theme.
//!
//! DESIGN
//! ======
//! Held in an `RwSignal<UiState>` provided through context by `App`. Reading
//! the signal is the getter, `update` is the setter, and any effect or view
//! closure that reads it is a subscriber. No module-level globals.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::i18n::{self, Locale, TextKey};

/// UI state shared by every component on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub locale: Locale,
    pub dark_mode: bool,
}

impl UiState {
    /// Text for `key` in the current locale.
    #[must_use]
    pub fn t(&self, key: TextKey) -> &'static str {
        i18n::translate(self.locale, key)
    }

    /// Label for the theme button: names the theme the button switches to.
    #[must_use]
    pub fn theme_toggle_label(&self) -> &'static str {
        self.t(if self.dark_mode { TextKey::ThemeLight } else { TextKey::ThemeDark })
    }

    /// Label for the language button: the code of the other locale.
    #[must_use]
    pub fn locale_toggle_label(&self) -> String {
        self.locale.toggle().code().to_ascii_uppercase()
    }
}
