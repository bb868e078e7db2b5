//! HTTP layer: REST calls and wire-protocol DTOs.

pub mod api;
pub mod types;
