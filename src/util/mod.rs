//! Utility helpers shared across pages and state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from page and
//! component logic to improve reuse and testability.

pub mod auth;
pub mod cookie;
pub mod seal;
pub mod validate;
