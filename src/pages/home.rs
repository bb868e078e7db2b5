//! Home page.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only gated route. Greets the stored profile and offers sign-out,
//! which drops both cookies and returns to `/signin`.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::{self, AuthState};
use crate::state::session::{Session, SessionVault};
use crate::util::auth::{RouteClass, install_route_guard};

/// Headline for the signed-in profile; degrades as identity fields thin out.
fn greeting(session: Option<&Session>) -> String {
    let Some(session) = session else {
        return "Welcome.".to_owned();
    };
    match (&session.user.fname, &session.user.lname) {
        (Some(fname), Some(lname)) => format!("Welcome back, {fname} {lname}."),
        (Some(fname), None) => format!("Welcome back, {fname}."),
        _ => "Welcome back.".to_owned(),
    }
}

/// Gated landing page. Redirects to `/signin` without a stored session.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let vault = expect_context::<SessionVault>();
    let navigate = use_navigate();

    install_route_guard(RouteClass::Gated, vault.clone(), navigate.clone());

    let session = vault.load_session();
    let headline = greeting(session.as_ref());
    let email = session.and_then(|session| session.user.email);

    let signout_vault = vault;
    let navigate_signin = navigate.clone();
    let on_signout = move |_| {
        auth::signout(&signout_vault);
        auth.update(|state| state.initialize_state());
        navigate_signin("/signin", NavigateOptions::default());
    };

    view! {
        <div class="home-page">
            <header class="home-page__header toolbar">
                <span class="toolbar__title">"File Manager"</span>
                <span class="toolbar__spacer"></span>
                <button class="btn toolbar__signout" on:click=on_signout title="Sign out">
                    "Sign Out"
                </button>
            </header>
            <main class="home-page__body">
                <h1 class="home-page__greeting">{headline}</h1>
                {email.map(|address| view! { <p class="home-page__email">{address}</p> })}
                <p class="home-page__placeholder">"Your files will appear here."</p>
            </main>
        </div>
    }
}
