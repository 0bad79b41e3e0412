//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::auth::AuthPage;
use crate::state::{auth::AuthState, ui::UiState};
use crate::util::prefs;

/// HTML shell rendered by an SSR host for hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="ru">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared `UiState` and `AuthState` signals. Stored preferences
/// are loaded once the app is live in the browser, so the server render and
/// the first hydrated render agree on defaults.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let ui = RwSignal::new(UiState::default());
    let auth = RwSignal::new(AuthState::default());
    provide_context(ui);
    provide_context(auth);

    Effect::new(move || ui.set(prefs::load()));
    Effect::new(move || prefs::apply(ui.get()));

    view! {
        <Stylesheet id="leptos" href="/pkg/authgate.css"/>
        <Title text="Authgate"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=AuthPage/>
            </Routes>
        </Router>
    }
}
