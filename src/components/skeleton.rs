//! Pulsing placeholder blocks for skeleton layouts.

use leptos::prelude::*;

/// A single pulsing placeholder. Size and placement come from the caller's
/// modifier class.
#[component]
pub fn SkeletonBlock(#[prop(optional)] class: &'static str) -> impl IntoView {
    view! { <div class=format!("skeleton {class}")></div> }
}
