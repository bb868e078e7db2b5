//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render form controls and notification chrome while
//! reading/writing shared state from Leptos context providers.

pub mod text_field;
pub mod toast;
