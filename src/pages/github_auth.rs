//! GitHub OAuth handoff page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/auth/github`. Reads the injected session status and the
//! `callbackUrl`/`error` query parameters, kicks off the provider sign-in,
//! and renders exactly one of loading / error / success-redirecting.

#[cfg(test)]
#[path = "github_auth_test.rs"]
mod github_auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::spinner::Spinner;
use crate::config::SiteConfig;
use crate::net::api::SignInOptions;
use crate::state::session::{SessionState, SessionStatus};
use crate::util::callback_url::resolve_callback_url;

/// Message shown when the sign-in invocation itself fails.
pub(crate) const SIGN_IN_FAILED_MESSAGE: &str =
    "Could not start GitHub sign-in. Please try again.";

const LOCK_ICON: &str = "M12 15v2m-6 4h12a2 2 0 002-2v-6a2 2 0 00-2-2H6a2 2 0 00-2 2v6a2 2 0 002 2zm10-10V7a4 4 0 00-8 0v4h8z";

/// What the handoff effect should do for a session status and an optional
/// provider-reported error parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AuthAction {
    /// Session still resolving — wait for the next status change.
    Wait,
    /// Already signed in — go straight to the dashboard.
    GoDashboard,
    /// The provider bounced back with an error; surface it, do not sign in.
    ShowProviderError(String),
    /// Kick off the sign-in handoff.
    StartSignIn,
}

/// Decide the next step. An empty `error` parameter counts as absent.
pub fn next_auth_action(status: SessionStatus, error_param: Option<&str>) -> AuthAction {
    match status {
        SessionStatus::Loading => AuthAction::Wait,
        SessionStatus::Authenticated => AuthAction::GoDashboard,
        SessionStatus::Unauthenticated => match error_param {
            Some(raw) if !raw.is_empty() => AuthAction::ShowProviderError(raw.to_owned()),
            _ => AuthAction::StartSignIn,
        },
    }
}

/// Error message embedding the provider's raw diagnostic value.
pub(crate) fn provider_error_message(raw: &str) -> String {
    format!("GitHub sign-in reported an error: {raw}")
}

/// The `callbackUrl` query parameter, defaulting to the dashboard.
/// An empty parameter counts as absent.
pub(crate) fn callback_url_or_default(param: Option<String>) -> String {
    param
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "/dashboard".to_owned())
}

/// OAuth handoff page — connects the browser session to GitHub.
#[component]
pub fn GithubAuthPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let config = expect_context::<SiteConfig>();
    let query = use_query_map();
    let navigate = use_navigate();

    let is_loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    let callback_url =
        Memo::new(move |_| callback_url_or_default(query.with(|q| q.get("callbackUrl"))));

    // Attempt generation: the effect can restart a sign-in while an earlier
    // one is still in flight, and a stale resolution must not touch state.
    let attempt = StoredValue::new(0u64);

    Effect::new(move || {
        let status = session.get().status;
        let error_param = query.with(|q| q.get("error"));

        match next_auth_action(status, error_param.as_deref()) {
            AuthAction::Wait => {}
            AuthAction::GoDashboard => navigate("/dashboard", NavigateOptions::default()),
            AuthAction::ShowProviderError(raw) => {
                is_loading.set(false);
                error.set(Some(provider_error_message(&raw)));
            }
            AuthAction::StartSignIn => {
                is_loading.set(true);
                let options = SignInOptions {
                    callback_url: resolve_callback_url(&config, &callback_url.get()),
                    redirect: false,
                };
                let generation = attempt.get_value() + 1;
                attempt.set_value(generation);

                #[cfg(feature = "hydrate")]
                leptos::task::spawn_local(async move {
                    let result = crate::net::api::sign_in("github", options).await;
                    // None means the page unmounted while the request was in
                    // flight; a mismatch means a newer attempt owns the state.
                    if attempt.try_get_value() != Some(generation) {
                        return;
                    }
                    if let Err(e) = result {
                        log::warn!("sign-in handoff failed: {e}");
                        is_loading.set(false);
                        error.set(Some(SIGN_IN_FAILED_MESSAGE.to_owned()));
                    }
                });
                #[cfg(not(feature = "hydrate"))]
                {
                    let _ = (options, generation);
                }
            }
        }
    });

    // Manual retry hands the raw, unresolved callback to the provider and
    // lets it drive the redirect.
    let on_retry = move |_| {
        let options = SignInOptions {
            callback_url: callback_url.get(),
            redirect: true,
        };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = crate::net::api::sign_in("github", options).await {
                if attempt.try_get_value().is_none() {
                    return;
                }
                log::warn!("sign-in retry failed: {e}");
                is_loading.set(false);
                error.set(Some(SIGN_IN_FAILED_MESSAGE.to_owned()));
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = options;
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <svg
                    class="auth-card__lock"
                    xmlns="http://www.w3.org/2000/svg"
                    fill="none"
                    viewBox="0 0 24 24"
                    stroke="currentColor"
                    stroke-width="2"
                    aria-hidden="true"
                >
                    <path stroke-linecap="round" stroke-linejoin="round" d=LOCK_ICON></path>
                </svg>

                <h1>"GitHub Sign-In"</h1>

                {move || {
                    if is_loading.get() {
                        view! {
                            <div class="auth-card__status">
                                <Spinner/>
                                <p>"Connecting to your GitHub account..."</p>
                            </div>
                        }
                            .into_any()
                    } else if let Some(message) = error.get() {
                        view! {
                            <div class="auth-card__status">
                                <div class="auth-card__error">
                                    <p>{message}</p>
                                </div>
                                <button class="btn btn--primary" on:click=on_retry>
                                    "Try again"
                                </button>
                            </div>
                        }
                            .into_any()
                    } else {
                        view! {
                            <div class="auth-card__status">
                                <div class="auth-card__success">
                                    <p>"Connected. Taking you to your dashboard..."</p>
                                </div>
                            </div>
                        }
                            .into_any()
                    }
                }}

                <p class="auth-card__note">
                    "Connecting your GitHub account gives Gitfolio read access to your public repositories. Your data stays private, and all analysis runs in your browser."
                </p>
            </div>
        </div>
    }
}
