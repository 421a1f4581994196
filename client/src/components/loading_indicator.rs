//! Busy placeholder for session checks and in-flight backend calls.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Checking your session...".to_owned());
    view! {
        <div class="loading-indicator" role="status" aria-live="polite">
            <span class="loading-indicator__spinner" aria-hidden="true"></span>
            <span class="loading-indicator__label">{label}</span>
        </div>
    }
}
