//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are purely presentational: they take static view data as props
//! and never read auth state or navigate.

pub mod activity_row;
pub mod avatar;
pub mod feature_card;
pub mod icon;
pub mod loading_spinner;
pub mod stat_card;
