//! Bilingual (Russian/English) UI dictionary.
//!
//! DESIGN
//! ======
//! Keys are an enum, so a typed lookup can never miss: each locale table is
//! an exhaustive `match`. The string-keyed [`translate_name`] exists for
//! callers holding a raw key name and falls back to that name when it is
//! unknown.

#[cfg(test)]
#[path = "i18n_test.rs"]
mod i18n_test;

/// Supported UI languages.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Locale {
    #[default]
    Ru,
    En,
}

impl Locale {
    pub const ALL: [Self; 2] = [Self::Ru, Self::En];

    /// Two-letter code, also used as the `<html lang>` value.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::En => "en",
        }
    }

    /// Parse a locale code, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ALL.into_iter().find(|l| l.code().eq_ignore_ascii_case(code))
    }

    /// The other locale.
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ru => Self::En,
            Self::En => Self::Ru,
        }
    }
}

/// Every string the auth UI renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TextKey {
    // Tabs
    TabSignIn,
    TabSignUp,
    // Form labels
    LabelEmail,
    LabelPassword,
    LabelUsername,
    LabelConfirm,
    // Placeholders
    PhUsername,
    // Buttons
    BtnSignIn,
    BtnSigningIn,
    BtnSignUp,
    BtnSigningUp,
    BtnLogout,
    // Messages
    ErrPasswordMismatch,
    ErrSignUp,
    ErrSignIn,
    ErrLogout,
    SuccSignUp,
    SuccSignIn,
    SuccLogout,
    // Authenticated view
    AuthTitle,
    AuthWelcome,
    // Theme toggle
    ThemeLight,
    ThemeDark,
}

impl TextKey {
    pub const ALL: [Self; 23] = [
        Self::TabSignIn,
        Self::TabSignUp,
        Self::LabelEmail,
        Self::LabelPassword,
        Self::LabelUsername,
        Self::LabelConfirm,
        Self::PhUsername,
        Self::BtnSignIn,
        Self::BtnSigningIn,
        Self::BtnSignUp,
        Self::BtnSigningUp,
        Self::BtnLogout,
        Self::ErrPasswordMismatch,
        Self::ErrSignUp,
        Self::ErrSignIn,
        Self::ErrLogout,
        Self::SuccSignUp,
        Self::SuccSignIn,
        Self::SuccLogout,
        Self::AuthTitle,
        Self::AuthWelcome,
        Self::ThemeLight,
        Self::ThemeDark,
    ];

    /// Stable camelCase key name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::TabSignIn => "tabSignIn",
            Self::TabSignUp => "tabSignUp",
            Self::LabelEmail => "labelEmail",
            Self::LabelPassword => "labelPassword",
            Self::LabelUsername => "labelUsername",
            Self::LabelConfirm => "labelConfirm",
            Self::PhUsername => "phUsername",
            Self::BtnSignIn => "btnSignIn",
            Self::BtnSigningIn => "btnSigningIn",
            Self::BtnSignUp => "btnSignUp",
            Self::BtnSigningUp => "btnSigningUp",
            Self::BtnLogout => "btnLogout",
            Self::ErrPasswordMismatch => "errPasswordMismatch",
            Self::ErrSignUp => "errSignUp",
            Self::ErrSignIn => "errSignIn",
            Self::ErrLogout => "errLogout",
            Self::SuccSignUp => "succSignUp",
            Self::SuccSignIn => "succSignIn",
            Self::SuccLogout => "succLogout",
            Self::AuthTitle => "authTitle",
            Self::AuthWelcome => "authWelcome",
            Self::ThemeLight => "themeLight",
            Self::ThemeDark => "themeDark",
        }
    }

    /// Look a key up by its exact name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }
}

/// Text for `key` in `locale`.
#[must_use]
pub fn translate(locale: Locale, key: TextKey) -> &'static str {
    match locale {
        Locale::Ru => ru(key),
        Locale::En => en(key),
    }
}

/// Text for a raw key name; unknown names come back unchanged.
#[must_use]
pub fn translate_name(locale: Locale, name: &str) -> &str {
    match TextKey::from_name(name) {
        Some(key) => translate(locale, key),
        None => name,
    }
}

fn ru(key: TextKey) -> &'static str {
    match key {
        TextKey::TabSignIn => "Вход",
        TextKey::TabSignUp => "Регистрация",
        TextKey::LabelEmail => "Email:",
        TextKey::LabelPassword => "Пароль:",
        TextKey::LabelUsername => "Имя пользователя:",
        TextKey::LabelConfirm => "Подтвердите пароль:",
        TextKey::PhUsername => "Имя пользователя",
        TextKey::BtnSignIn => "Войти",
        TextKey::BtnSigningIn => "Вход...",
        TextKey::BtnSignUp => "Зарегистрироваться",
        TextKey::BtnSigningUp => "Регистрация...",
        TextKey::BtnLogout => "Выйти",
        TextKey::ErrPasswordMismatch => "Пароли не совпадают",
        TextKey::ErrSignUp => "Произошла ошибка при регистрации",
        TextKey::ErrSignIn => "Произошла ошибка при входе",
        TextKey::ErrLogout => "Произошла ошибка при выходе",
        TextKey::SuccSignUp => "Регистрация прошла успешно!",
        TextKey::SuccSignIn => "Вход выполнен успешно!",
        TextKey::SuccLogout => "Вы вышли из системы",
        TextKey::AuthTitle => "Вы вошли в систему",
        TextKey::AuthWelcome => "Добро пожаловать!",
        TextKey::ThemeLight => "☀️ Светлая",
        TextKey::ThemeDark => "🌙 Темная",
    }
}

fn en(key: TextKey) -> &'static str {
    match key {
        TextKey::TabSignIn | TextKey::BtnSignIn => "Sign In",
        TextKey::TabSignUp | TextKey::BtnSignUp => "Sign Up",
        TextKey::LabelEmail => "Email:",
        TextKey::LabelPassword => "Password:",
        TextKey::LabelUsername => "Username:",
        TextKey::LabelConfirm => "Confirm Password:",
        TextKey::PhUsername => "Username",
        TextKey::BtnSigningIn => "Signing in...",
        TextKey::BtnSigningUp => "Signing up...",
        TextKey::BtnLogout => "Log Out",
        TextKey::ErrPasswordMismatch => "Passwords do not match",
        TextKey::ErrSignUp => "An error occurred during registration",
        TextKey::ErrSignIn => "An error occurred during sign in",
        TextKey::ErrLogout => "An error occurred during logout",
        TextKey::SuccSignUp => "Registration successful!",
        TextKey::SuccSignIn => "Sign in successful!",
        TextKey::SuccLogout => "You have been logged out",
        TextKey::AuthTitle => "You are logged in",
        TextKey::AuthWelcome => "Welcome back!",
        TextKey::ThemeLight => "☀️ Light",
        TextKey::ThemeDark => "🌙 Dark",
    }
}
