//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::net::api::HttpNamesApi;
use crate::pages::home::NameLogPage;
use crate::state::names::NameLogState;

/// Root application component.
///
/// Provides the page state and the HTTP client to every child component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(NameLogState::default()));
    provide_context(HttpNamesApi::default());

    view! {
        <Title text="Name Log"/>
        <NameLogPage/>
    }
}
