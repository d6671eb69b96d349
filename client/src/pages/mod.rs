//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page pairs a renderer-agnostic controller (auth snapshot in, view
//! model and redirects out) with the Leptos component that draws it, and
//! delegates presentation details to `components`.

pub mod dashboard;
pub mod landing;
pub mod login;
pub mod register;
