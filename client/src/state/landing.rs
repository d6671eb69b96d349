//! Static landing-page content: feature highlights and the sign-in /
//! sign-up calls to action.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use crate::util::route::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Visual weight of a call-to-action button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Emphasis {
    Primary,
    Outline,
    Secondary,
}

impl Emphasis {
    pub fn class(self) -> &'static str {
        match self {
            Self::Primary => "btn btn--primary",
            Self::Outline => "btn btn--outline",
            Self::Secondary => "btn btn--secondary",
        }
    }
}

/// A button that navigates somewhere.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavAction {
    pub label: &'static str,
    pub route: Route,
    pub emphasis: Emphasis,
    pub icon: &'static str,
}

pub const FEATURES: [Feature; 3] = [
    Feature {
        title: "Modern Design",
        description: "Beautiful modal-based interface with smooth animations",
        icon: "sparkles",
    },
    Feature {
        title: "Secure Auth",
        description: "Protected routes with secure authentication flow",
        icon: "shield",
    },
    Feature {
        title: "Fast Performance",
        description: "Optimized for speed with a Rust and WebAssembly frontend",
        icon: "zap",
    },
];

pub const HERO_ACTIONS: [NavAction; 2] = [
    NavAction { label: "Sign In", route: Route::Login, emphasis: Emphasis::Primary, icon: "log-in" },
    NavAction { label: "Create Account", route: Route::Register, emphasis: Emphasis::Outline, icon: "user-plus" },
];

pub const CARD_ACTIONS: [NavAction; 2] = [
    NavAction { label: "Sign in to Dashboard", route: Route::Login, emphasis: Emphasis::Primary, icon: "log-in" },
    NavAction {
        label: "Create New Account",
        route: Route::Register,
        emphasis: Emphasis::Secondary,
        icon: "user-plus",
    },
];
