//! Client-side form validation rules.
//!
//! DESIGN
//! ======
//! Each rule is a pure function returning the message to show, so local
//! failures and server field errors render through the same per-field
//! slots. Messages are user-facing copy, not error codes.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use regex::Regex;

const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

/// Minimum accepted password length.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Loose structural email check: one `@`, a dot in the domain, no spaces.
pub fn valid_email(email: &str) -> bool {
    Regex::new(EMAIL_PATTERN).is_ok_and(|re| re.is_match(email))
}

/// Name fields only need to be present.
pub fn validate_required(value: &str) -> Option<&'static str> {
    value.trim().is_empty().then_some("Required")
}

/// Email must parse structurally; an empty field is also "invalid".
pub fn validate_email_field(value: &str) -> Option<&'static str> {
    if valid_email(value.trim()) {
        None
    } else {
        Some("Invalid email")
    }
}

/// Password composition rules, reported one failure at a time.
pub fn validate_password(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        return Some("Required");
    }
    if value.chars().count() < MIN_PASSWORD_LEN {
        return Some("Password must be at least 8 characters long");
    }
    if !value.chars().any(|c| c.is_ascii_digit()) {
        return Some("Password must contain at least one digit");
    }
    if !value.chars().any(|c| c.is_ascii_lowercase()) {
        return Some("Password must contain at least one lowercase letter");
    }
    if !value.chars().any(|c| c.is_ascii_uppercase()) {
        return Some("Password must contain at least one uppercase letter");
    }
    if !value.chars().any(is_special) {
        return Some("Password must contain at least one special character");
    }
    None
}

/// The confirmation field must repeat the password exactly.
pub fn validate_confirm_password(password: &str, confirm: &str) -> Option<&'static str> {
    (password != confirm).then_some("Password does not match")
}

/// Sign-in submits only once both fields hold something.
pub fn signin_submit_enabled(email: &str, password: &str) -> bool {
    !email.trim().is_empty() && !password.is_empty()
}

/// Special means outside letters, digits, underscore, and space.
fn is_special(c: char) -> bool {
    !(c.is_ascii_alphanumeric() || c == '_' || c == ' ')
}
