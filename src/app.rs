//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::SiteConfig;
use crate::pages::{github_auth::GithubAuthPage, home::HomePage};
use crate::state::session::SessionState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and site-configuration contexts and sets up
/// client-side routing. Pages read the session signal; only the probe
/// spawned here writes it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    provide_context(session);
    provide_context(SiteConfig::from_build_env());

    // Session probe — resolves the initial Loading status into a definite one.
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let status = crate::net::api::fetch_session().await;
        session.set(SessionState { status });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/gitfolio.css"/>
        <Title text="Gitfolio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=(StaticSegment("auth"), StaticSegment("github")) view=GithubAuthPage/>
            </Routes>
        </Router>
    }
}
