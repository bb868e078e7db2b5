//! Sign-up page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Public entry route. Validates locally before any request goes out, then
//! merges server field errors into the same inline slots. Success shows the
//! server's confirmation and returns the visitor to `/signin`.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::text_field::TextField;
use crate::components::toast::notify;
use crate::config::AppConfig;
use crate::net::types::{FieldErrorSet, SignupRequest, SignupUser};
use crate::state::auth::{AuthState, RequestError};
use crate::state::session::SessionVault;
use crate::state::toast::{ToastState, ToastVariant};
use crate::util::auth::{RouteClass, install_route_guard};
use crate::util::validate;

/// Per-field messages rendered inline on the form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SignupFormErrors {
    fname: Option<String>,
    lname: Option<String>,
    email: Option<String>,
    password: Option<String>,
    confirm_password: Option<String>,
}

impl SignupFormErrors {
    fn is_clear(&self) -> bool {
        self.fname.is_none()
            && self.lname.is_none()
            && self.email.is_none()
            && self.password.is_none()
            && self.confirm_password.is_none()
    }

    /// Server field errors land in the same slots as local validation. The
    /// confirmation field never comes from the server.
    fn from_server(set: &FieldErrorSet) -> Self {
        Self {
            fname: set.fname.clone(),
            lname: set.lname.clone(),
            email: set.email.clone(),
            password: set.password.clone(),
            confirm_password: None,
        }
    }
}

/// Run every client-side rule against already-trimmed inputs.
fn validate_form(fname: &str, lname: &str, email: &str, password: &str, confirm: &str) -> SignupFormErrors {
    SignupFormErrors {
        fname: validate::validate_required(fname).map(|message| message.to_owned()),
        lname: validate::validate_required(lname).map(|message| message.to_owned()),
        email: validate::validate_email_field(email).map(|message| message.to_owned()),
        password: validate::validate_password(password).map(|message| message.to_owned()),
        confirm_password: validate::validate_confirm_password(password, confirm)
            .map(|message| message.to_owned()),
    }
}

/// Mounting the form retires any outcome left by a previous visit, so the
/// page's effects only fire for lifecycles driven from this mount.
fn reset_signup_outcome(auth: RwSignal<AuthState>) {
    auth.update(|state| state.signup.initialize());
}

fn submit_signup(auth: RwSignal<AuthState>, config: AppConfig, request: SignupRequest) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(crate::state::auth::request_signup(auth, config, request));
    #[cfg(not(feature = "hydrate"))]
    let _ = (auth, config, request);
}

/// Account-creation form with inline validation messages.
#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let vault = expect_context::<SessionVault>();
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();

    reset_signup_outcome(auth);
    install_route_guard(RouteClass::Public, vault, navigate.clone());

    let fname = RwSignal::new(String::new());
    let lname = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let errors = RwSignal::new(SignupFormErrors::default());

    let fname_error = Memo::new(move |_| errors.get().fname);
    let lname_error = Memo::new(move |_| errors.get().lname);
    let email_error = Memo::new(move |_| errors.get().email);
    let password_error = Memo::new(move |_| errors.get().password);
    let confirm_error = Memo::new(move |_| errors.get().confirm_password);

    // Editing a field retires that field's message.
    let clear_fname = Callback::new(move |()| errors.update(|slots| slots.fname = None));
    let clear_lname = Callback::new(move |()| errors.update(|slots| slots.lname = None));
    let clear_email = Callback::new(move |()| errors.update(|slots| slots.email = None));
    let clear_password = Callback::new(move |()| errors.update(|slots| slots.password = None));
    let clear_confirm = Callback::new(move |()| errors.update(|slots| slots.confirm_password = None));

    let submit_config = config.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if auth.get_untracked().signup.loading {
            return;
        }
        let fname_value = fname.get_untracked().trim().to_owned();
        let lname_value = lname.get_untracked().trim().to_owned();
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        let confirm_value = confirm_password.get_untracked();

        let form_errors =
            validate_form(&fname_value, &lname_value, &email_value, &password_value, &confirm_value);
        if !form_errors.is_clear() {
            errors.set(form_errors);
            return;
        }
        errors.set(SignupFormErrors::default());
        let request = SignupRequest {
            user: SignupUser {
                fname: fname_value,
                lname: lname_value,
                email: email_value,
                password: password_value,
            },
        };
        submit_signup(auth, submit_config.clone(), request);
    };

    // Server outcome: field payloads land inline, messages become toasts.
    let signup_error = Memo::new(move |_| auth.get().signup.error);
    Effect::new(move || match signup_error.get() {
        Some(RequestError::Fields(set)) => errors.set(SignupFormErrors::from_server(&set)),
        Some(RequestError::Message(message)) => notify(toasts, ToastVariant::Destructive, message),
        None => {}
    });

    let signup_success = Memo::new(move |_| {
        let slot = auth.get().signup;
        slot.success.then_some(slot.success_message)
    });
    let navigate_signin = navigate.clone();
    Effect::new(move || {
        if let Some(message) = signup_success.get() {
            notify(toasts, ToastVariant::Info, message);
            navigate_signin("/signin", NavigateOptions::default());
        }
    });

    view! {
        <div class="auth-page">
            <div class="auth-card auth-card--wide">
                <h1 class="auth-card__title">"Create Account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <div class="auth-form__row">
                        <TextField label="First Name" value=fname error=fname_error on_edit=clear_fname/>
                        <TextField label="Last Name" value=lname error=lname_error on_edit=clear_lname/>
                    </div>
                    <div class="auth-form__row">
                        <TextField
                            label="Email"
                            value=email
                            input_type="email"
                            error=email_error
                            on_edit=clear_email
                        />
                    </div>
                    <div class="auth-form__row">
                        <TextField
                            label="Password"
                            value=password
                            input_type="password"
                            error=password_error
                            on_edit=clear_password
                        />
                        <TextField
                            label="Confirm Password"
                            value=confirm_password
                            input_type="password"
                            error=confirm_error
                            on_edit=clear_confirm
                        />
                    </div>
                    <button
                        class="btn btn--primary auth-form__submit"
                        type="submit"
                        disabled=move || auth.get().signup.loading || !errors.get().is_clear()
                    >
                        {move || if auth.get().signup.loading { "Signing Up..." } else { "Signup" }}
                    </button>
                </form>
                <p class="auth-card__footer">
                    "Already have an account? "
                    <a class="auth-card__link" href="/signin">
                        "Sign In"
                    </a>
                </p>
            </div>
        </div>
    }
}
