//! Wire-protocol DTOs for the authentication endpoints.
//!
//! DESIGN
//! ======
//! These types mirror the REST payloads exactly so serde does the shape
//! discrimination. In particular the error body decodes into a tagged union
//! at this boundary instead of being shape-sniffed downstream.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Sign-in request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    /// Account email address.
    pub email: String,
    /// Plain-text password; exists only for the request.
    pub password: String,
}

/// New-account fields nested under `user` in the sign-up body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupUser {
    /// First name.
    pub fname: String,
    /// Last name.
    pub lname: String,
    /// Account email address.
    pub email: String,
    /// Plain-text password; exists only for the request.
    pub password: String,
}

/// Sign-up request envelope (`{"user": {...}}`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupRequest {
    /// The account to create.
    pub user: SignupUser,
}

/// Token envelope nested under `meta` in the sign-in response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMeta {
    /// Opaque bearer token for the authenticated session.
    pub token: String,
}

/// Successful sign-in payload under `data`.
///
/// The identity fields are nullable on the wire; only the token is
/// guaranteed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigninData {
    /// Account email address, if the server echoes it.
    pub email: Option<String>,
    /// First name, if known.
    pub fname: Option<String>,
    /// Last name, if known.
    pub lname: Option<String>,
    /// Token envelope.
    pub meta: TokenMeta,
}

/// Sign-in response envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SigninResponse {
    /// Successful payload.
    pub data: SigninData,
}

/// Successful sign-up payload under `data`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupData {
    /// Whether the account was created.
    #[serde(default)]
    pub success: bool,
    /// Confirmation copy to surface to the user.
    pub message: String,
}

/// Sign-up response envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignupResponse {
    /// Successful payload.
    pub data: SignupData,
}

/// Error response envelope (`{"error": ...}`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// The error in one of its two wire shapes.
    pub error: ErrorPayload,
}

/// The two error shapes the server produces.
///
/// Sign-in failures and most sign-up failures carry a plain string; sign-up
/// validation failures carry an array of per-field messages. `untagged`
/// lets serde pick the variant by shape so callers never have to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorPayload {
    /// Whole-request message.
    Message(String),
    /// Per-field messages; the server sends a single-element array.
    Fields(Vec<FieldErrorSet>),
}

/// Per-field validation messages from the sign-up endpoint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldErrorSet {
    /// First-name error, if any.
    pub fname: Option<String>,
    /// Last-name error, if any.
    pub lname: Option<String>,
    /// Email error, if any.
    pub email: Option<String>,
    /// Password error, if any.
    pub password: Option<String>,
}
