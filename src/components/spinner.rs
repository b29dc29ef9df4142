//! Indeterminate loading spinner.

use leptos::prelude::*;

/// Spinning ring shown while an async handoff is in flight.
#[component]
pub fn Spinner() -> impl IntoView {
    view! { <div class="spinner" role="status" aria-label="Loading"></div> }
}
