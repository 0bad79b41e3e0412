//! Auth page: sign-in and sign-up tabs, plus the signed-in view with logout.
//!
//! Form input is checked locally by the `validate_*` helpers; everything else
//! (wrong password, taken email) comes back from the server as an
//! `AuthError` and is shown verbatim.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::i18n::TextKey;
use crate::net::types::{SignInRequest, SignUpRequest};
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::prefs;

/// Which form is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthTab {
    #[default]
    SignIn,
    SignUp,
}

/// Build a sign-in request from raw form values.
///
/// Email is trimmed; the password is sent exactly as typed.
pub(crate) fn validate_sign_in(email: &str, password: &str) -> Result<SignInRequest, TextKey> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(TextKey::ErrSignIn);
    }
    Ok(SignInRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Build a sign-up request from raw form values, checking the confirmation.
pub(crate) fn validate_sign_up(
    username: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<SignUpRequest, TextKey> {
    let username = username.trim();
    let email = email.trim();
    if username.is_empty() || email.is_empty() || password.is_empty() {
        return Err(TextKey::ErrSignUp);
    }
    if password != confirm {
        return Err(TextKey::ErrPasswordMismatch);
    }
    Ok(SignUpRequest { username: username.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

fn submit_label(busy: bool, idle: TextKey, pending: TextKey) -> TextKey {
    if busy { pending } else { idle }
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let tab = RwSignal::new(AuthTab::default());
    let email = RwSignal::new(String::new());

    let on_theme = move |_| ui.update(|u| *u = prefs::toggle_dark_mode(*u));
    let on_locale = move |_| ui.update(|u| *u = prefs::toggle_locale(*u));

    let notice_class = move || {
        let error = auth.get().notice.is_some_and(|n| n.is_error());
        if error { "auth-message auth-message--error" } else { "auth-message" }
    };
    let notice_text = move || {
        let locale = ui.get().locale;
        auth.get().notice.map(|n| n.text(locale)).unwrap_or_default()
    };

    view! {
        <div class="auth-page">
            <header class="auth-header">
                <button class="btn auth-header__theme" on:click=on_theme>
                    {move || ui.get().theme_toggle_label()}
                </button>
                <button class="btn auth-header__locale" on:click=on_locale>
                    {move || ui.get().locale_toggle_label()}
                </button>
            </header>
            <div class="auth-card">
                <Show
                    when=move || auth.get().signed_in
                    fallback=move || view! { <AuthForms tab=tab email=email/> }
                >
                    <SignedInView/>
                </Show>
                <Show when=move || auth.get().notice.is_some()>
                    <p class=notice_class>{notice_text}</p>
                </Show>
            </div>
        </div>
    }
}

#[component]
fn AuthForms(tab: RwSignal<AuthTab>, email: RwSignal<String>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let t = move |key: TextKey| ui.get().t(key);
    let tab_class = move |which: AuthTab| {
        if tab.get() == which { "auth-tab auth-tab--active" } else { "auth-tab" }
    };

    view! {
        <div class="auth-tabs">
            <button class=move || tab_class(AuthTab::SignIn) on:click=move |_| tab.set(AuthTab::SignIn)>
                {move || t(TextKey::TabSignIn)}
            </button>
            <button class=move || tab_class(AuthTab::SignUp) on:click=move |_| tab.set(AuthTab::SignUp)>
                {move || t(TextKey::TabSignUp)}
            </button>
        </div>
        <Show
            when=move || tab.get() == AuthTab::SignIn
            fallback=move || view! { <SignUpForm tab=tab email=email/> }
        >
            <SignInForm email=email/>
        </Show>
    }
}

#[component]
fn SignInForm(email: RwSignal<String>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let password = RwSignal::new(String::new());
    let t = move |key: TextKey| ui.get().t(key);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().busy {
            return;
        }
        let request = match validate_sign_in(&email.get_untracked(), &password.get_untracked()) {
            Ok(request) => request,
            Err(key) => {
                auth.update(|s| s.reject(key));
                return;
            }
        };
        auth.update(AuthState::begin);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match crate::net::api::AuthClient::configured() {
                Ok(client) => client.sign_in(&request).await,
                Err(e) => Err(e),
            };
            if result.is_ok() {
                password.set(String::new());
            }
            auth.update(|s| s.finish_sign_in(result));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label class="auth-label">
                {move || t(TextKey::LabelEmail)}
                <input
                    class="auth-input"
                    type="email"
                    required
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-label">
                {move || t(TextKey::LabelPassword)}
                <input
                    class="auth-input"
                    type="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <button class="auth-button" type="submit" disabled=move || auth.get().busy>
                {move || t(submit_label(auth.get().busy, TextKey::BtnSignIn, TextKey::BtnSigningIn))}
            </button>
        </form>
    }
}

#[component]
fn SignUpForm(tab: RwSignal<AuthTab>, email: RwSignal<String>) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let t = move |key: TextKey| ui.get().t(key);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().busy {
            return;
        }
        let request = match validate_sign_up(
            &username.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(request) => request,
            Err(key) => {
                auth.update(|s| s.reject(key));
                return;
            }
        };
        auth.update(AuthState::begin);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match crate::net::api::AuthClient::configured() {
                Ok(client) => client.sign_up(&request).await,
                Err(e) => Err(e),
            };
            let created = result.is_ok();
            auth.update(|s| s.finish_sign_up(result));
            if created {
                email.set(request.email);
                tab.set(AuthTab::SignIn);
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, tab);
    };

    view! {
        <form class="auth-form" on:submit=on_submit>
            <label class="auth-label">
                {move || t(TextKey::LabelUsername)}
                <input
                    class="auth-input"
                    type="text"
                    required
                    placeholder=move || t(TextKey::PhUsername)
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-label">
                {move || t(TextKey::LabelEmail)}
                <input
                    class="auth-input"
                    type="email"
                    required
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-label">
                {move || t(TextKey::LabelPassword)}
                <input
                    class="auth-input"
                    type="password"
                    required
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <label class="auth-label">
                {move || t(TextKey::LabelConfirm)}
                <input
                    class="auth-input"
                    type="password"
                    required
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
            </label>
            <button class="auth-button" type="submit" disabled=move || auth.get().busy>
                {move || t(submit_label(auth.get().busy, TextKey::BtnSignUp, TextKey::BtnSigningUp))}
            </button>
        </form>
    }
}

#[component]
fn SignedInView() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let t = move |key: TextKey| ui.get().t(key);

    let on_logout = move |_| {
        if auth.get_untracked().busy {
            return;
        }
        auth.update(AuthState::begin);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = match crate::net::api::AuthClient::configured() {
                Ok(client) => client.logout().await,
                Err(e) => Err(e),
            };
            auth.update(|s| s.finish_logout(result));
        });
    };

    view! {
        <div class="auth-signed-in">
            <h1>{move || t(TextKey::AuthTitle)}</h1>
            <p class="auth-card__subtitle">{move || t(TextKey::AuthWelcome)}</p>
            <button class="auth-button" on:click=on_logout disabled=move || auth.get().busy>
                {move || t(TextKey::BtnLogout)}
            </button>
        </div>
    }
}
