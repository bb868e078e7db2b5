//! REST calls for the authentication endpoints.
//!
//! Client-side (hydrate): real HTTP via `gloo-net`, raced against a timeout.
//! Server-side (SSR): stubs returning [`Error::Unavailable`] since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are decoded here into [`ErrorPayload`] so downstream
//! state code branches on a tagged value, never on raw body shape. Bodies
//! that fail to decode degrade to a status-line message.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{Credentials, ErrorPayload, SigninData, SignupData, SignupRequest};
#[cfg(any(test, feature = "hydrate"))]
use super::types::ErrorBody;
#[cfg(feature = "hydrate")]
use super::types::{SigninResponse, SignupResponse};
use crate::config::AppConfig;

/// Why an authentication request failed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The request never produced a response.
    #[error("request could not be sent: {0}")]
    Transport(String),
    /// No response arrived within the configured window.
    #[error("request timed out after {0} ms")]
    Timeout(u64),
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Decoded error body, or a status-line fallback.
        payload: ErrorPayload,
    },
    /// A 2xx response carried a body that did not match the wire shape.
    #[error("response body could not be decoded: {0}")]
    Decode(String),
    /// Network calls are compiled out of this build.
    #[error("network calls are not available in this build")]
    Unavailable,
}

#[cfg(any(test, feature = "hydrate"))]
fn signin_endpoint(base: &str) -> String {
    format!("{base}/signin")
}

#[cfg(any(test, feature = "hydrate"))]
fn signup_endpoint(base: &str) -> String {
    format!("{base}/signup")
}

#[cfg(any(test, feature = "hydrate"))]
fn status_message(status: u16) -> String {
    format!("Request failed with status {status}")
}

/// Decode a non-2xx body into its tagged payload, falling back to a
/// status-line message when the body is not the documented error envelope.
#[cfg(any(test, feature = "hydrate"))]
fn decode_error_body(status: u16, body: &str) -> ErrorPayload {
    serde_json::from_str::<ErrorBody>(body)
        .map_or_else(|_| ErrorPayload::Message(status_message(status)), |decoded| decoded.error)
}

/// Exchange credentials for a session via `POST {base}/signin`.
///
/// # Errors
///
/// Returns the transport, timeout, server, or decode failure that prevented
/// sign-in.
pub async fn signin(config: &AppConfig, credentials: &Credentials) -> Result<SigninData, Error> {
    #[cfg(feature = "hydrate")]
    {
        let url = signin_endpoint(&config.api_base);
        let response: SigninResponse = post_json(&url, config.request_timeout_ms, credentials).await?;
        Ok(response.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, credentials);
        Err(Error::Unavailable)
    }
}

/// Create an account via `POST {base}/signup`.
///
/// # Errors
///
/// Returns the transport, timeout, server, or decode failure that prevented
/// account creation.
pub async fn signup(config: &AppConfig, request: &SignupRequest) -> Result<SignupData, Error> {
    #[cfg(feature = "hydrate")]
    {
        let url = signup_endpoint(&config.api_base);
        let response: SignupResponse = post_json(&url, config.request_timeout_ms, request).await?;
        Ok(response.data)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, request);
        Err(Error::Unavailable)
    }
}

/// POST a JSON body and decode the JSON response, enforcing the timeout.
#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, timeout_ms: u64, body: &B) -> Result<T, Error>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    use std::time::Duration;

    use futures::future::{Either, select};

    let request = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| Error::Transport(e.to_string()))?
        .send();
    let timeout = gloo_timers::future::sleep(Duration::from_millis(timeout_ms));
    futures::pin_mut!(request);
    futures::pin_mut!(timeout);

    let response = match select(request, timeout).await {
        Either::Left((sent, _)) => sent.map_err(|e| Error::Transport(e.to_string()))?,
        Either::Right(((), _)) => return Err(Error::Timeout(timeout_ms)),
    };

    let status = response.status();
    if response.ok() {
        response.json::<T>().await.map_err(|e| Error::Decode(e.to_string()))
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(Error::Api { status, payload: decode_error_body(status, &body) })
    }
}
