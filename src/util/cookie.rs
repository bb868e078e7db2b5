//! Browser cookie jar glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes hydrate-only `document.cookie` access so the session vault
//! stays free of web-sys plumbing. Session cookies live at the site root
//! so every route reads the same jar.

#[cfg(test)]
#[path = "cookie_test.rs"]
mod cookie_test;

/// Read the raw value of the cookie `name`.
/// Returns `None` when the cookie is absent or off the browser build.
pub fn read_cookie(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let header = document()?.cookie().ok()?;
        cookie_from_header(&header, name)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}

/// Write `name=value` at the site root.
pub fn write_cookie(name: &str, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = document() else {
            return;
        };
        let _ = doc.set_cookie(&set_cookie_header(name, value));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (name, value);
    }
}

/// Expire the cookie `name` at the site root.
pub fn delete_cookie(name: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(doc) = document() else {
            return;
        };
        let _ = doc.set_cookie(&delete_cookie_header(name));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
    }
}

#[cfg(feature = "hydrate")]
fn document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?
        .document()?
        .dyn_into::<web_sys::HtmlDocument>()
        .ok()
}

/// Find `name` in a `document.cookie` header like `"a=1; b=2"`.
#[cfg(any(test, feature = "hydrate"))]
fn cookie_from_header(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        (key.trim() == name).then(|| value.trim().to_owned())
    })
}

/// Assignment string for a root-path cookie.
#[cfg(any(test, feature = "hydrate"))]
fn set_cookie_header(name: &str, value: &str) -> String {
    format!("{name}={value}; path=/; SameSite=Lax")
}

/// Assignment string that expires a root-path cookie immediately.
#[cfg(any(test, feature = "hydrate"))]
fn delete_cookie_header(name: &str) -> String {
    format!("{name}=; path=/; Max-Age=0; SameSite=Lax")
}
