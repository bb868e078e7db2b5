//! Encrypted cookie persistence for the signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route gating reads the session from here and nowhere else: a visitor is
//! authenticated iff both cookies are present and open cleanly. Values are
//! sealed with the key injected at construction, so a tampered or foreign
//! cookie degrades to "signed out" rather than an error.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::util::{cookie, seal};

/// Cookie holding the sealed bearer token.
pub const AUTH_TOKEN_COOKIE: &str = "AUTH_TOKEN";
/// Cookie holding the sealed profile blob.
pub const AUTH_USER_COOKIE: &str = "AUTH_USER";

/// Profile slice persisted alongside the token.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    /// Account email address, if the server echoed it.
    pub email: Option<String>,
    /// First name, if known.
    pub fname: Option<String>,
    /// Last name, if known.
    pub lname: Option<String>,
}

/// The authenticated-user record persisted client-side after sign-in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// Opaque bearer token from the sign-in response.
    pub token: String,
    /// Profile shown on gated pages.
    pub user: SessionUser,
}

/// Cookie jar that seals values with an injected key.
///
/// Cloneable so it can live in Leptos context; the key is the only state.
#[derive(Clone)]
pub struct SessionVault {
    key: [u8; 32],
}

impl SessionVault {
    #[must_use]
    pub fn new(key: [u8; 32]) -> Self {
        Self { key }
    }

    /// Serialize, seal, and write `value` under `name` at the site root.
    pub fn set<T: Serialize>(&self, name: &str, value: &T) {
        match encode_value(&self.key, name, value) {
            Some(sealed) => cookie::write_cookie(name, &sealed),
            None => log::warn!("cookie {name} could not be sealed"),
        }
    }

    /// Read, open, and parse the cookie under `name`.
    ///
    /// Absent, tampered, foreign-key, and unparsable cookies all read as
    /// `None`.
    #[must_use]
    pub fn get<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let sealed = cookie::read_cookie(name)?;
        let value = decode_value(&self.key, name, &sealed);
        if value.is_none() {
            log::warn!("cookie {name} is present but did not open");
        }
        value
    }

    /// Delete the cookie under `name` at the site root.
    pub fn remove(&self, name: &str) {
        cookie::delete_cookie(name);
    }

    /// Persist a session as the token + profile cookie pair.
    pub fn store_session(&self, session: &Session) {
        self.set(AUTH_TOKEN_COOKIE, &session.token);
        self.set(AUTH_USER_COOKIE, &session.user);
    }

    /// Load the session, requiring BOTH cookies to open.
    #[must_use]
    pub fn load_session(&self) -> Option<Session> {
        session_from_parts(self.get(AUTH_TOKEN_COOKIE), self.get(AUTH_USER_COOKIE))
    }

    /// Delete both session cookies.
    pub fn clear_session(&self) {
        self.remove(AUTH_TOKEN_COOKIE);
        self.remove(AUTH_USER_COOKIE);
    }

    /// Whether a complete session is stored. Pure read, no side effects.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.load_session().is_some()
    }
}

fn session_from_parts(token: Option<String>, user: Option<SessionUser>) -> Option<Session> {
    match (token, user) {
        (Some(token), Some(user)) => Some(Session { token, user }),
        _ => None,
    }
}

fn encode_value<T: Serialize>(key: &[u8; 32], name: &str, value: &T) -> Option<String> {
    let json = serde_json::to_string(value).ok()?;
    seal::seal(key, name, &json)
}

fn decode_value<T: DeserializeOwned>(key: &[u8; 32], name: &str, sealed: &str) -> Option<T> {
    let json = seal::open(key, name, sealed)?;
    serde_json::from_str(&json).ok()
}
