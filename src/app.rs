//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::use_navigate,
};

use crate::components::toast::ToastHost;
use crate::config::AppConfig;
use crate::pages::{home::HomePage, signin::SigninPage, signup::SignupPage};
use crate::state::auth::AuthState;
use crate::state::session::SessionVault;
use crate::state::toast::ToastState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
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
/// Constructs the per-process context objects once (config, session vault,
/// auth and toast state) and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::from_build_env();
    let vault = SessionVault::new(config.cookie_key);
    let auth = RwSignal::new(AuthState::default());
    let toasts = RwSignal::new(ToastState::default());

    provide_context(config);
    provide_context(vault);
    provide_context(auth);
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/vestibule.css"/>
        <Title text="File Manager"/>

        <ToastHost/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RootRedirect/>
                <Route path=StaticSegment("signin") view=SigninPage/>
                <Route path=StaticSegment("signup") view=SignupPage/>
                <Route path=StaticSegment("home") view=HomePage/>
            </Routes>
        </Router>
    }
}

/// The bare root replaces itself with `/signin`.
#[component]
fn RootRedirect() -> impl IntoView {
    let navigate = use_navigate();
    Effect::new(move || {
        navigate("/signin", NavigateOptions { replace: true, ..NavigateOptions::default() });
    });
}
