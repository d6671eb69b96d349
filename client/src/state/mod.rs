//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain so pages depend on small focused models: `auth`
//! is the live session store, `dashboard` and `landing` hold fixed content.

pub mod auth;
pub mod dashboard;
pub mod landing;
