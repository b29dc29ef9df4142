//! Cards for the home page feature grid and roadmap strip.

use leptos::prelude::*;

/// Feature card with an icon, title, and description.
#[component]
pub fn FeatureCard(
    icon_path: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="feature-card">
            <div class="feature-card__icon">
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    aria-hidden="true"
                >
                    <path stroke-linecap="round" stroke-linejoin="round" d=icon_path></path>
                </svg>
            </div>
            <h3 class="feature-card__title">{title}</h3>
            <p class="feature-card__description">{description}</p>
        </div>
    }
}

/// Compact card for planned capabilities.
#[component]
pub fn RoadmapCard(title: &'static str, description: &'static str) -> impl IntoView {
    view! {
        <div class="roadmap-card">
            <h3 class="roadmap-card__title">{title}</h3>
            <p class="roadmap-card__description">{description}</p>
        </div>
    }
}
