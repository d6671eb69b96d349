//! Network boundary: wire DTOs and REST helpers for the auth backend.

pub mod api;
pub mod types;
