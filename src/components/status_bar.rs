//! Footer status bar showing backend health and the API base URL.

use leptos::prelude::*;

use crate::net::api::HttpNamesApi;
use crate::state::health::BackendHealth;
use crate::state::names::NameLogState;

/// Status bar at the bottom of the page.
///
/// The dot and label stay in a "checking" state until the first health
/// check answers.
#[component]
pub fn StatusBar() -> impl IntoView {
    let state = expect_context::<RwSignal<NameLogState>>();
    let base_url = expect_context::<HttpNamesApi>().base_url().to_owned();

    let status_class = move || {
        let modifier = state.with(|s| s.health.as_ref().map_or("pending", BackendHealth::css_modifier));
        format!("status-bar__dot status-bar__dot--{modifier}")
    };

    let status_label = move || {
        state.with(|s| {
            s.health
                .as_ref()
                .map_or_else(|| "Backend: checking...".to_owned(), BackendHealth::label)
        })
    };

    view! {
        <footer class="status-bar">
            <span class="status-bar__connection">
                <span class=status_class></span>
                {status_label}
            </span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__api">{base_url}</span>
        </footer>
    }
}
