//! Home page with a skeleton-to-content swap.
//!
//! The skeleton mirrors the final layout (hero, feature grid, CTA) and is
//! replaced when the page is ready: the browser `load` event or a fixed
//! ceiling, whichever fires first.

use leptos::prelude::*;

use crate::components::feature_card::{FeatureCard, RoadmapCard};
use crate::components::skeleton::SkeletonBlock;

/// Upper bound on how long the skeleton stays up, even on slow loads.
#[cfg(feature = "hydrate")]
const READY_CEILING_MS: u32 = 2_000;

const ICON_ANALYSIS: &str = "M9.663 17h4.673M12 3v1m6.364 1.636l-.707.707M21 12h-1M4 12H3m3.343-5.657l-.707-.707m2.828 9.9a5 5 0 117.072 0l-.548.547A3.374 3.374 0 0014 18.469V19a2 2 0 11-4 0v-.531c0-.895-.356-1.754-.988-2.386l-.548-.547z";
const ICON_DASHBOARD: &str = "M9 19v-6a2 2 0 00-2-2H5a2 2 0 00-2 2v6a2 2 0 002 2h2a2 2 0 002-2zm0 0V9a2 2 0 012-2h2a2 2 0 012 2v10m-6 0a2 2 0 002 2h2a2 2 0 002-2m0 0V5a2 2 0 012-2h2a2 2 0 012 2v14a2 2 0 01-2 2h-2a2 2 0 01-2-2z";
const ICON_PORTFOLIO: &str = "M12 10v6m0 0l-3-3m3 3l3-3M3 17V7a2 2 0 012-2h6l2 2h6a2 2 0 012 2v8a2 2 0 01-2 2H5a2 2 0 01-2-2z";

/// Home page — marketing content behind a bounded skeleton.
///
/// Loading is one-way: once any readiness producer fires, the content stays.
#[component]
pub fn HomePage() -> impl IntoView {
    let is_loading = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        use gloo_timers::callback::Timeout;

        use crate::util::ready::ReadyLatch;

        let latch = ReadyLatch::new(move || is_loading.set(false));

        // Already loaded — no load event is coming.
        if document_complete() {
            latch.fire();
        }

        // Both handles wrap browser resources, so they live in local storage.
        let event_latch = latch.clone();
        let listener = StoredValue::new_local(Some(window_event_listener(
            leptos::ev::load,
            move |_| event_latch.fire(),
        )));

        let timer_latch = latch.clone();
        let ceiling = StoredValue::new_local(Some(Timeout::new(READY_CEILING_MS, move || {
            timer_latch.fire();
        })));

        on_cleanup(move || {
            listener.update_value(|handle| {
                if let Some(handle) = handle.take() {
                    handle.remove();
                }
            });
            // Dropping the timeout cancels it if it has not fired yet.
            ceiling.update_value(|timer| drop(timer.take()));
        });
    }

    view! {
        <Show when=move || !is_loading.get() fallback=|| view! { <HomeSkeleton/> }>
            <HomeContent/>
        </Show>
    }
}

#[cfg(feature = "hydrate")]
fn document_complete() -> bool {
    web_sys::window()
        .and_then(|w| w.document())
        .map_or(false, |d| d.ready_state() == "complete")
}

/// Final page content: hero, feature grid, roadmap strip, CTA.
#[component]
fn HomeContent() -> impl IntoView {
    view! {
        <section class="home-hero">
            <div class="home-hero__inner">
                <div class="home-hero__copy">
                    <h1>"Turn your GitHub history"</h1>
                    <h1>
                        "into a portfolio, "
                        <span class="home-hero__accent">"automatically"</span>
                    </h1>
                    <p>"Rule-based analysis reads your repositories and commits"</p>
                    <p>"and turns them into a visual profile of your skills."</p>
                    <div class="home-hero__actions">
                        <a href="/dashboard" class="btn btn--light">
                            "Get started"
                        </a>
                        <a href="/about" class="btn btn--outline">
                            "Learn more"
                        </a>
                    </div>
                </div>
                <div class="home-hero__visual">
                    <img
                        src="/images/gitfolio_main.webp"
                        alt="Contribution analysis preview"
                        class="home-hero__image"
                    />
                </div>
            </div>
        </section>

        <section class="home-features">
            <div class="home-features__inner">
                <div class="home-features__heading">
                    <h2>"What Gitfolio does"</h2>
                    <p>"Gitfolio analyzes your GitHub repositories to identify"</p>
                    <p>"your tech stack and contributions, then turns them into a portfolio."</p>
                </div>

                <div class="home-features__grid">
                    <FeatureCard
                        icon_path=ICON_ANALYSIS
                        title="Rule-Based Analysis"
                        description="A rule engine inspects code and commit patterns across your repositories to identify the technologies you actually use."
                    />
                    <FeatureCard
                        icon_path=ICON_DASHBOARD
                        title="Visual Dashboard"
                        description="Charts and graphs show your per-project contributions and tech stack at a glance."
                    />
                    <FeatureCard
                        icon_path=ICON_PORTFOLIO
                        title="PDF Portfolio"
                        description="Analysis results become a polished portfolio PDF that presents your work without the manual write-up."
                    />
                </div>

                <div class="home-roadmap">
                    <div class="home-roadmap__heading">
                        <h2>"What's next"</h2>
                        <p>"Beyond rule-based analysis, upcoming releases add model-assisted insight into your work."</p>
                    </div>
                    <div class="home-roadmap__grid">
                        <RoadmapCard
                            title="AI Commit Analysis"
                            description="Deeper commit-message understanding backed by a trained model."
                        />
                        <RoadmapCard
                            title="Code Quality Scoring"
                            description="Automated quality assessment with concrete improvement suggestions."
                        />
                        <RoadmapCard
                            title="Developer Profiles"
                            description="Generated narrative profiles tailored to your contribution history."
                        />
                        <RoadmapCard
                            title="Tech Trend Insights"
                            description="Your skills mapped against current technology trends."
                        />
                    </div>
                </div>
            </div>
        </section>

        <section class="home-cta">
            <div class="home-cta__inner">
                <h2>"Let your work speak for itself"</h2>
                <p>"Rule-based analysis builds an objective technical profile from your GitHub record."</p>
                <p>"Sign in to see what your contributions say about you."</p>
                <a href="/auth/github" class="home-cta__button">
                    "Sign in with GitHub"
                </a>
            </div>
        </section>
    }
}

/// Skeleton placeholder structurally matching [`HomeContent`].
#[component]
fn HomeSkeleton() -> impl IntoView {
    view! {
        <section class="home-hero">
            <div class="home-hero__inner">
                <div class="home-hero__copy">
                    <SkeletonBlock class="skeleton--title"/>
                    <SkeletonBlock class="skeleton--title skeleton--wide"/>
                    <SkeletonBlock class="skeleton--subtitle"/>
                    <div class="home-hero__actions">
                        <SkeletonBlock class="skeleton--button"/>
                        <SkeletonBlock class="skeleton--button skeleton--button-wide"/>
                    </div>
                </div>
                <div class="home-hero__visual">
                    <SkeletonBlock class="skeleton--media"/>
                </div>
            </div>
        </section>

        <section class="home-features">
            <div class="home-features__inner">
                <div class="home-features__heading">
                    <SkeletonBlock class="skeleton--heading"/>
                    <SkeletonBlock class="skeleton--line"/>
                    <SkeletonBlock class="skeleton--line skeleton--short"/>
                </div>
                <div class="home-features__grid">
                    {(0..3)
                        .map(|_| {
                            view! {
                                <div class="feature-card">
                                    <SkeletonBlock class="skeleton--icon"/>
                                    <SkeletonBlock class="skeleton--card-title"/>
                                    <SkeletonBlock class="skeleton--line"/>
                                    <SkeletonBlock class="skeleton--line"/>
                                    <SkeletonBlock class="skeleton--line skeleton--short"/>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>

        <section class="home-cta">
            <div class="home-cta__inner">
                <SkeletonBlock class="skeleton--heading"/>
                <SkeletonBlock class="skeleton--line"/>
                <SkeletonBlock class="skeleton--line skeleton--short"/>
                <SkeletonBlock class="skeleton--button skeleton--button-wide"/>
            </div>
        </section>
    }
}
