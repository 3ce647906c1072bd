//! Single-line error banner above the list.

use leptos::prelude::*;

use crate::state::names::NameLogState;

/// Shows the current error message, if any, independent of loading state.
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let state = expect_context::<RwSignal<NameLogState>>();

    view! {
        <Show when=move || state.with(NameLogState::has_error)>
            <div class="error-banner" role="alert">
                {move || state.with(|s| s.error_message.clone())}
            </div>
        </Show>
    }
}
