//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate router and auth collaborators from page logic to
//! improve reuse and testability.

pub mod auth;
pub mod initials;
pub mod route;
