//! The name log page: form, error banner, list, and status footer.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only route. It starts the initial list load (followed by the
//! health check) once on mount; later loads come from submits.

use leptos::prelude::*;

use crate::components::error_banner::ErrorBanner;
use crate::components::name_form::NameForm;
use crate::components::name_list::NameList;
use crate::components::status_bar::StatusBar;
use crate::net::api::HttpNamesApi;
use crate::state::names::NameLogState;
use crate::state::tasks::load_initial;

/// Name log page.
#[component]
pub fn NameLogPage() -> impl IntoView {
    let state = expect_context::<RwSignal<NameLogState>>();
    let api = expect_context::<HttpNamesApi>();

    leptos::task::spawn_local(async move {
        let _ = load_initial(&api, &state).await;
    });

    view! {
        <main class="namelog">
            <div class="namelog__container">
                <h1>"Name Log"</h1>
                <NameForm/>
                <ErrorBanner/>
                <NameList/>
                <StatusBar/>
            </div>
        </main>
    }
}
