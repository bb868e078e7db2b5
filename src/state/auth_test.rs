use super::*;
use crate::net::types::TokenMeta;

fn failed(status: u16, payload: ErrorPayload) -> api::Error {
    api::Error::Api { status, payload }
}

// =============================================================
// Request lifecycle transitions
// =============================================================

#[test]
fn default_slot_is_idle() {
    let slot = RequestState::default();
    assert!(!slot.loading);
    assert!(!slot.success);
    assert!(slot.success_message.is_empty());
    assert_eq!(slot.error, None);
}

#[test]
fn begin_marks_loading_and_clears_outcome() {
    let mut slot = RequestState {
        loading: false,
        success: true,
        success_message: "old".to_owned(),
        error: Some(RequestError::Message("old".to_owned())),
    };
    slot.begin();
    assert!(slot.loading);
    assert!(!slot.success);
    assert!(slot.success_message.is_empty());
    assert_eq!(slot.error, None);
}

#[test]
fn succeed_records_message_and_stops_loading() {
    let mut slot = RequestState::default();
    slot.begin();
    slot.succeed("Account created.".to_owned());
    assert!(!slot.loading);
    assert!(slot.success);
    assert_eq!(slot.success_message, "Account created.");
    assert_eq!(slot.error, None);
}

#[test]
fn fail_records_error_and_stops_loading() {
    let mut slot = RequestState::default();
    slot.begin();
    slot.fail(RequestError::Message("no".to_owned()));
    assert!(!slot.loading);
    assert!(!slot.success);
    assert!(slot.success_message.is_empty());
    assert_eq!(slot.error, Some(RequestError::Message("no".to_owned())));
}

#[test]
fn initialize_resets_outcome_regardless_of_prior_state() {
    let mut slot = RequestState {
        loading: true,
        success: true,
        success_message: "done".to_owned(),
        error: Some(RequestError::Message("no".to_owned())),
    };
    slot.initialize();
    assert!(slot.loading);
    assert!(!slot.success);
    assert!(slot.success_message.is_empty());
    assert_eq!(slot.error, None);
}

#[test]
fn initialize_state_covers_both_operations() {
    let mut state = AuthState::default();
    state.signin.fail(RequestError::Message("a".to_owned()));
    state.signup.succeed("b".to_owned());
    state.initialize_state();
    assert_eq!(state.signin.error, None);
    assert!(!state.signup.success);
    assert!(state.signup.success_message.is_empty());
}

// =============================================================
// Error normalization
// =============================================================

#[test]
fn server_message_becomes_request_message() {
    let error = failed(401, ErrorPayload::Message("Invalid email or password.".to_owned()));
    assert_eq!(
        normalize_error(&error),
        RequestError::Message("Invalid email or password.".to_owned())
    );
}

#[test]
fn field_errors_keep_first_element() {
    let first = FieldErrorSet { email: Some("has already been taken".to_owned()), ..FieldErrorSet::default() };
    let second = FieldErrorSet { password: Some("is too short".to_owned()), ..FieldErrorSet::default() };
    let error = failed(422, ErrorPayload::Fields(vec![first.clone(), second]));
    assert_eq!(normalize_error(&error), RequestError::Fields(first));
}

#[test]
fn empty_field_array_degrades_to_status_message() {
    let error = failed(422, ErrorPayload::Fields(vec![]));
    assert_eq!(
        normalize_error(&error),
        RequestError::Message("request failed with status 422".to_owned())
    );
}

#[test]
fn transport_failure_becomes_message() {
    let error = api::Error::Transport("connection refused".to_owned());
    assert_eq!(
        normalize_error(&error),
        RequestError::Message("request could not be sent: connection refused".to_owned())
    );
}

#[test]
fn timeout_becomes_message() {
    let error = api::Error::Timeout(10_000);
    assert_eq!(
        normalize_error(&error),
        RequestError::Message("request timed out after 10000 ms".to_owned())
    );
}

// =============================================================
// Sign-in completion
// =============================================================

#[test]
fn complete_signin_stores_then_returns_success_copy() {
    let vault = SessionVault::new([7u8; 32]);
    let data = SigninData {
        email: None,
        fname: None,
        lname: None,
        meta: TokenMeta { token: "tok".to_owned() },
    };
    assert_eq!(complete_signin(&vault, data), SIGNIN_SUCCESS_MESSAGE);
}

// =============================================================
// Session mapping
// =============================================================

#[test]
fn signin_data_maps_to_session() {
    let data = SigninData {
        email: Some("ada@example.com".to_owned()),
        fname: Some("Ada".to_owned()),
        lname: Some("Lovelace".to_owned()),
        meta: TokenMeta { token: "tok".to_owned() },
    };
    let session = session_from_signin(data);
    assert_eq!(session.token, "tok");
    assert_eq!(session.user.email.as_deref(), Some("ada@example.com"));
    assert_eq!(session.user.lname.as_deref(), Some("Lovelace"));
}

#[test]
fn signin_data_keeps_absent_identity_absent() {
    let data = SigninData { email: None, fname: None, lname: None, meta: TokenMeta { token: "t".to_owned() } };
    let session = session_from_signin(data);
    assert_eq!(session.user, SessionUser::default());
}
