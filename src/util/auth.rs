//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entry pages and the home page apply mirrored redirect behavior driven by
//! whether a session is stored in cookies. The mapping lives in a pure
//! function so both directions stay covered by native tests.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionVault;

/// How a route relates to the stored session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    /// Entry pages for visitors without a session.
    Public,
    /// Pages that require a stored session.
    Gated,
}

/// Destination to redirect to when the route class and session state disagree.
#[must_use]
pub fn redirect_target(class: RouteClass, authenticated: bool) -> Option<&'static str> {
    match (class, authenticated) {
        (RouteClass::Public, true) => Some("/home"),
        (RouteClass::Gated, false) => Some("/signin"),
        _ => None,
    }
}

/// Redirect away from a page whose route class does not match the session.
pub fn install_route_guard<F>(class: RouteClass, vault: SessionVault, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if let Some(target) = redirect_target(class, vault.is_authenticated()) {
            navigate(target, NavigateOptions::default());
        }
    });
}
