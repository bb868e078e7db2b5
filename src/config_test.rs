use super::*;

// =============================================================
// API base normalization
// =============================================================

#[test]
fn api_base_defaults_when_unset() {
    assert_eq!(normalize_api_base(None), DEFAULT_API_BASE);
}

#[test]
fn api_base_defaults_when_blank() {
    assert_eq!(normalize_api_base(Some("   ")), DEFAULT_API_BASE);
}

#[test]
fn api_base_keeps_custom_value() {
    assert_eq!(normalize_api_base(Some("/api/v2")), "/api/v2");
}

#[test]
fn api_base_strips_trailing_slash() {
    assert_eq!(normalize_api_base(Some("https://auth.example.com/api/v1/")), "https://auth.example.com/api/v1");
}

// =============================================================
// Timeout parsing
// =============================================================

#[test]
fn timeout_defaults_when_unset() {
    assert_eq!(parse_timeout_ms(None), DEFAULT_REQUEST_TIMEOUT_MS);
}

#[test]
fn timeout_parses_positive_millis() {
    assert_eq!(parse_timeout_ms(Some("2500")), 2500);
}

#[test]
fn timeout_rejects_zero() {
    assert_eq!(parse_timeout_ms(Some("0")), DEFAULT_REQUEST_TIMEOUT_MS);
}

#[test]
fn timeout_rejects_garbage() {
    assert_eq!(parse_timeout_ms(Some("fast")), DEFAULT_REQUEST_TIMEOUT_MS);
}

// =============================================================
// Cookie key parsing
// =============================================================

#[test]
fn cookie_key_accepts_32_decoded_bytes() {
    let encoded = Base64::encode_string(&[7u8; 32]);
    assert_eq!(parse_cookie_key(Some(&encoded)), Some([7u8; 32]));
}

#[test]
fn cookie_key_rejects_wrong_length() {
    let encoded = Base64::encode_string(&[7u8; 16]);
    assert_eq!(parse_cookie_key(Some(&encoded)), None);
}

#[test]
fn cookie_key_rejects_invalid_base64() {
    assert_eq!(parse_cookie_key(Some("not base64!")), None);
}

#[test]
fn cookie_key_rejects_unset() {
    assert_eq!(parse_cookie_key(None), None);
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_config_uses_documented_defaults() {
    let config = AppConfig::default();
    assert_eq!(config.api_base, DEFAULT_API_BASE);
    assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
}
