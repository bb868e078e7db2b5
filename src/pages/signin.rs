//! Sign-in page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public entry route. Submits credentials through the shared auth state,
//! surfaces failures as destructive toasts, and moves to `/home` once the
//! session cookies are written.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::text_field::TextField;
use crate::components::toast::notify;
use crate::config::AppConfig;
use crate::net::types::Credentials;
use crate::state::auth::{AuthState, RequestError};
use crate::state::session::SessionVault;
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::auth::{RouteClass, install_route_guard};
use crate::util::validate;

/// Build the request body from raw form input. The email is trimmed; the
/// password is sent as typed.
fn credentials_from_inputs(email: &str, password: &str) -> Credentials {
    Credentials { email: email.trim().to_owned(), password: password.to_owned() }
}

/// Toast copy for a failed sign-in. Field-shaped payloads collapse to their
/// first message since this form has no inline slots.
fn toast_message(error: &RequestError) -> String {
    match error {
        RequestError::Message(message) => message.clone(),
        RequestError::Fields(set) => [&set.fname, &set.lname, &set.email, &set.password]
            .into_iter()
            .find_map(Clone::clone)
            .unwrap_or_else(|| "Sign in failed.".to_owned()),
    }
}

/// Mounting the form retires any outcome left by a previous visit, so the
/// page's effects only fire for lifecycles driven from this mount.
fn reset_signin_outcome(auth: RwSignal<AuthState>) {
    auth.update(|state| state.signin.initialize());
}

fn submit_signin(auth: RwSignal<AuthState>, vault: SessionVault, config: AppConfig, credentials: Credentials) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::state::auth::request_signin(auth, vault, config, credentials));
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, vault, config, credentials);
}

/// Sign-in form. Redirects to `/home` when a session is already stored.
#[component]
pub fn SigninPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let vault = expect_context::<SessionVault>();
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();

    reset_signin_outcome(auth);
    install_route_guard(RouteClass::Public, vault.clone(), navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());

    let enabled = Memo::new(move |_| validate::signin_submit_enabled(&email.get(), &password.get()));

    // Editing either field retires a stale failure.
    let on_edit = Callback::new(move |()| {
        if auth.get_untracked().signin.error.is_some() {
            auth.update(|state| state.signin.error = None);
        }
    });

    let submit_vault = vault.clone();
    let submit_config = config.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().signin.loading || !enabled.get_untracked() {
            return;
        }
        let credentials = credentials_from_inputs(&email.get_untracked(), &password.get_untracked());
        submit_signin(auth, submit_vault.clone(), submit_config.clone(), credentials);
    };

    // Toast on the error edge, not on every auth-state write.
    let signin_error = Memo::new(move |_| auth.get().signin.error);
    Effect::new(move || {
        if let Some(error) = signin_error.get() {
            notify(toasts, ToastVariant::Destructive, toast_message(&error));
        }
    });

    let signin_success = Memo::new(move |_| {
        let slot = auth.get().signin;
        slot.success.then_some(slot.success_message)
    });
    let navigate_home = navigate.clone();
    Effect::new(move || {
        if let Some(message) = signin_success.get() {
            notify(toasts, ToastVariant::Info, message);
            navigate_home("/home", NavigateOptions::default());
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1 class="auth-card__title">"File Manager"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <TextField
                        label="Email"
                        value=email
                        input_type="email"
                        placeholder="you@example.com"
                        on_edit=on_edit
                    />
                    <TextField label="Password" value=password input_type="password" on_edit=on_edit/>
                    <button
                        class="btn btn--primary auth-form__submit"
                        type="submit"
                        disabled=move || auth.get().signin.loading || !enabled.get()
                    >
                        {move || if auth.get().signin.loading { "Signing In..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Don't have an account? "
                    <a class="auth-card__link" href="/signup">
                        "Sign Up"
                    </a>
                </p>
            </div>
        </div>
    }
}
