//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth` lifecycles, `session` persistence,
//! `toast` chrome) so pages depend on small focused models.

pub mod auth;
pub mod session;
pub mod toast;
