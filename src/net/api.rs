//! REST API helpers for communicating with the auth backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning inert values since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result`/status outputs instead of panics so auth failures
//! degrade to UI state without crashing hydration.

#![allow(clippy::unused_async)]

use crate::state::session::SessionStatus;

/// Options forwarded to the sign-in endpoint.
///
/// `redirect: false` leaves navigation to the caller's session handling;
/// `redirect: true` follows the provider's authorization URL immediately.
pub struct SignInOptions {
    pub callback_url: String,
    pub redirect: bool,
}

/// Probe `/api/auth/session` for the current session status.
///
/// Any transport or payload failure degrades to `Unauthenticated` — the
/// pages treat an unknown session the same as a signed-out one.
pub async fn fetch_session() -> SessionStatus {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Deserialize)]
        struct SessionResponse {
            authenticated: bool,
        }

        let resp = match gloo_net::http::Request::get("/api/auth/session")
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                log::warn!("session probe failed: {e}");
                return SessionStatus::Unauthenticated;
            }
        };
        if !resp.ok() {
            return SessionStatus::Unauthenticated;
        }
        match resp.json::<SessionResponse>().await {
            Ok(body) if body.authenticated => SessionStatus::Authenticated,
            Ok(_) => SessionStatus::Unauthenticated,
            Err(e) => {
                log::warn!("session payload parse failed: {e}");
                SessionStatus::Unauthenticated
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        SessionStatus::Unauthenticated
    }
}

/// Start a sign-in with the given provider via `POST /api/auth/signin/{provider}`.
///
/// # Errors
///
/// Returns an error string if the request cannot be built or sent, or the
/// backend rejects it.
pub async fn sign_in(provider: &str, options: SignInOptions) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/auth/signin/{provider}");
        let resp = gloo_net::http::Request::post(&url)
            .json(&serde_json::json!({
                "callbackUrl": options.callback_url,
                "redirect": options.redirect,
            }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("sign-in request failed: {}", resp.status()));
        }

        #[derive(serde::Deserialize)]
        struct SignInResponse {
            url: Option<String>,
        }
        let body: SignInResponse = resp.json().await.map_err(|e| e.to_string())?;

        if options.redirect {
            if let (Some(target), Some(window)) = (body.url, web_sys::window()) {
                window
                    .location()
                    .set_href(&target)
                    .map_err(|e| format!("redirect failed: {e:?}"))?;
            }
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (provider, options);
        Err("not available on server".to_owned())
    }
}
