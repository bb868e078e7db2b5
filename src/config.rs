//! Build-time application configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The client has no runtime environment to read; like the bundler it
//! replaced, overrides are compiled in. `App` constructs one `AppConfig` at
//! startup and provides it via context to the HTTP layer and the session
//! vault.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use base64ct::{Base64, Encoding};

/// Default REST base path for the authentication endpoints.
pub const DEFAULT_API_BASE: &str = "/api/v1";

/// Default per-request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

/// Development fallback for the cookie sealing key.
///
/// Real deployments compile in `VESTIBULE_COOKIE_KEY` (Base64, 32 bytes);
/// shipping the fallback would let anyone open the session cookies.
const DEV_COOKIE_KEY: [u8; 32] = *b"vestibule-dev-cookie-sealing-key";

/// Immutable configuration shared by the HTTP layer and the session vault.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base path prepended to every endpoint, without a trailing slash.
    pub api_base: String,
    /// Upper bound on how long a request may stay in flight.
    pub request_timeout_ms: u64,
    /// 32-byte key used to seal and open the session cookies.
    pub cookie_key: [u8; 32],
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            cookie_key: DEV_COOKIE_KEY,
        }
    }
}

impl AppConfig {
    /// Build the configuration from compile-time environment overrides,
    /// falling back to defaults for anything unset or unparsable.
    pub fn from_build_env() -> Self {
        let cookie_key = parse_cookie_key(option_env!("VESTIBULE_COOKIE_KEY")).unwrap_or_else(|| {
            log::warn!("no usable VESTIBULE_COOKIE_KEY; sealing session cookies with the dev key");
            DEV_COOKIE_KEY
        });

        Self {
            api_base: normalize_api_base(option_env!("VESTIBULE_API_BASE")),
            request_timeout_ms: parse_timeout_ms(option_env!("VESTIBULE_REQUEST_TIMEOUT_MS")),
            cookie_key,
        }
    }
}

/// Trim whitespace and any trailing slash so endpoint joins stay predictable.
fn normalize_api_base(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|base| !base.is_empty()) {
        Some(base) => base.trim_end_matches('/').to_owned(),
        None => DEFAULT_API_BASE.to_owned(),
    }
}

/// Parse a positive millisecond count; anything else keeps the default.
fn parse_timeout_ms(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<u64>().ok())
        .filter(|ms| *ms > 0)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_MS)
}

/// Decode a Base64 key override; only exactly 32 decoded bytes are usable.
fn parse_cookie_key(raw: Option<&str>) -> Option<[u8; 32]> {
    let decoded = Base64::decode_vec(raw?.trim()).ok()?;
    <[u8; 32]>::try_from(decoded).ok()
}
