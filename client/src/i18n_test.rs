use std::collections::HashSet;

use super::*;

// =============================================================
// Locale
// =============================================================

#[test]
fn locale_default_is_russian() {
    assert_eq!(Locale::default(), Locale::Ru);
}

#[test]
fn locale_code_round_trips() {
    for locale in Locale::ALL {
        assert_eq!(Locale::from_code(locale.code()), Some(locale));
    }
}

#[test]
fn locale_from_code_is_lenient_about_case_and_spaces() {
    assert_eq!(Locale::from_code(" EN "), Some(Locale::En));
    assert_eq!(Locale::from_code("Ru"), Some(Locale::Ru));
    assert_eq!(Locale::from_code("de"), None);
    assert_eq!(Locale::from_code(""), None);
}

#[test]
fn locale_toggle_flips() {
    assert_eq!(Locale::Ru.toggle(), Locale::En);
    assert_eq!(Locale::En.toggle(), Locale::Ru);
}

// =============================================================
// TextKey
// =============================================================

#[test]
fn text_key_names_are_unique_and_round_trip() {
    let mut seen = HashSet::new();
    for key in TextKey::ALL {
        assert!(seen.insert(key.name()), "duplicate name {}", key.name());
        assert_eq!(TextKey::from_name(key.name()), Some(key));
    }
}

#[test]
fn text_key_from_name_is_exact() {
    assert_eq!(TextKey::from_name("tabSignIn"), Some(TextKey::TabSignIn));
    assert_eq!(TextKey::from_name("TabSignIn"), None);
}

// =============================================================
// translate
// =============================================================

#[test]
fn every_key_has_text_in_every_locale() {
    for locale in Locale::ALL {
        for key in TextKey::ALL {
            assert!(!translate(locale, key).is_empty(), "{locale:?} missing {key:?}");
        }
    }
}

#[test]
fn translate_picks_locale_table() {
    assert_eq!(translate(Locale::En, TextKey::BtnLogout), "Log Out");
    assert_eq!(translate(Locale::Ru, TextKey::BtnLogout), "Выйти");
    assert_eq!(translate(Locale::En, TextKey::ErrPasswordMismatch), "Passwords do not match");
    assert_eq!(translate(Locale::Ru, TextKey::ErrPasswordMismatch), "Пароли не совпадают");
}

#[test]
fn translate_name_resolves_known_keys() {
    assert_eq!(translate_name(Locale::En, "succSignIn"), "Sign in successful!");
    assert_eq!(translate_name(Locale::Ru, "authWelcome"), "Добро пожаловать!");
}

#[test]
fn translate_name_falls_back_to_key() {
    assert_eq!(translate_name(Locale::En, "noSuchKey"), "noSuchKey");
    assert_eq!(translate_name(Locale::Ru, ""), "");
}
