//! Sign-in/sign-up request lifecycles.
//!
//! SYSTEM CONTEXT
//! ==============
//! One `RwSignal<AuthState>` is provided via context from `App`; pages drive
//! it through `request_signin`/`request_signup` and render from it. Each
//! operation owns an independent idle → loading → success/error slot, and
//! server error payloads are normalized here into one tagged value so the
//! forms never inspect wire shapes.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::net::api;
use crate::net::types::{Credentials, ErrorPayload, FieldErrorSet, SigninData, SignupRequest};
use crate::state::session::{Session, SessionUser, SessionVault};

/// Toast copy shown after a successful sign-in.
pub const SIGNIN_SUCCESS_MESSAGE: &str = "Signed in successfully.";

/// A failed request, normalized for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RequestError {
    /// Whole-request message, rendered as a toast.
    Message(String),
    /// Per-field messages, rendered inline on the form.
    Fields(FieldErrorSet),
}

/// Lifecycle slot for one request kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestState {
    /// A request is in flight; submits are ignored while set.
    pub loading: bool,
    /// The last request completed successfully.
    pub success: bool,
    /// Copy to surface on success.
    pub success_message: String,
    /// The last request's normalized failure, if any.
    pub error: Option<RequestError>,
}

impl RequestState {
    fn begin(&mut self) {
        self.loading = true;
        self.success = false;
        self.success_message.clear();
        self.error = None;
    }

    fn succeed(&mut self, message: String) {
        self.loading = false;
        self.success = true;
        self.success_message = message;
        self.error = None;
    }

    fn fail(&mut self, error: RequestError) {
        self.loading = false;
        self.success = false;
        self.success_message.clear();
        self.error = Some(error);
    }

    /// Reset outcome fields. `loading` belongs to the in-flight request and
    /// is left alone.
    pub fn initialize(&mut self) {
        self.success = false;
        self.success_message.clear();
        self.error = None;
    }
}

/// Request state for both authentication operations.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Sign-in lifecycle.
    pub signin: RequestState,
    /// Sign-up lifecycle.
    pub signup: RequestState,
}

impl AuthState {
    /// Reset `error`, `success`, and `success_message` of both operations
    /// regardless of prior state.
    pub fn initialize_state(&mut self) {
        self.signin.initialize();
        self.signup.initialize();
    }
}

/// Run the sign-in request lifecycle against `auth.signin`.
pub async fn request_signin(
    auth: RwSignal<AuthState>,
    vault: SessionVault,
    config: AppConfig,
    credentials: Credentials,
) {
    auth.update(|state| state.signin.begin());
    match api::signin(&config, &credentials).await {
        Ok(data) => {
            let message = complete_signin(&vault, data);
            auth.update(|state| state.signin.succeed(message));
        }
        Err(error) => {
            log::warn!("signin request failed: {error}");
            auth.update(|state| state.signin.fail(normalize_error(&error)));
        }
    }
}

/// Run the sign-up request lifecycle against `auth.signup`. No cookies are
/// written; the success message comes from the server.
pub async fn request_signup(auth: RwSignal<AuthState>, config: AppConfig, request: SignupRequest) {
    auth.update(|state| state.signup.begin());
    match api::signup(&config, &request).await {
        Ok(data) => auth.update(|state| state.signup.succeed(data.message)),
        Err(error) => {
            log::warn!("signup request failed: {error}");
            auth.update(|state| state.signup.fail(normalize_error(&error)));
        }
    }
}

/// Drop the stored session.
pub fn signout(vault: &SessionVault) {
    vault.clear_session();
}

/// Store the session, then hand back the success copy.
///
/// The cookies are written before the caller flips the success flag, so
/// `is_authenticated()` already holds when pages react to the outcome.
fn complete_signin(vault: &SessionVault, data: SigninData) -> String {
    vault.store_session(&session_from_signin(data));
    SIGNIN_SUCCESS_MESSAGE.to_owned()
}

fn session_from_signin(data: SigninData) -> Session {
    Session {
        token: data.meta.token,
        user: SessionUser { email: data.email, fname: data.fname, lname: data.lname },
    }
}

/// Map an HTTP-layer failure into the rendering taxonomy: server field
/// errors keep their first element, everything else becomes a message.
fn normalize_error(error: &api::Error) -> RequestError {
    match error {
        api::Error::Api { payload, .. } => match payload {
            ErrorPayload::Message(message) => RequestError::Message(message.clone()),
            ErrorPayload::Fields(sets) => match sets.first() {
                Some(set) => RequestError::Fields(set.clone()),
                None => RequestError::Message(error.to_string()),
            },
        },
        other => RequestError::Message(other.to_string()),
    }
}
