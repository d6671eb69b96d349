//! REST API helpers for the external auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs, since session cookies only exist in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures collapse to "no user" instead of surfacing errors. An unreachable
//! auth backend is indistinguishable from being signed out, which is what the
//! redirect logic expects.

#![allow(clippy::unused_async)]

use super::types::User;

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = match gloo_net::http::Request::get("/api/auth/me").send().await {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("auth lookup failed: {e}");
                return None;
            }
        };
        if !resp.ok() {
            log::debug!("auth lookup returned {}", resp.status());
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// End the backend session with `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        if let Err(e) = gloo_net::http::Request::post("/api/auth/logout").send().await {
            log::warn!("logout request failed: {e}");
        }
    }
}
