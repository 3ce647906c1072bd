//! Saved-name list with count header, loading and empty states.

use leptos::prelude::*;

use crate::net::types::NameRecord;
use crate::state::names::{ListRegion, NameLogState};
use crate::util::timestamp::format_created_at;

/// List region. The loading indicator only appears while the list is empty,
/// so a refresh never hides records already on screen.
#[component]
pub fn NameList() -> impl IntoView {
    let state = expect_context::<RwSignal<NameLogState>>();

    let count_label = move || state.with(NameLogState::count_label);

    view! {
        <section class="name-list">
            <h2 class="name-list__title">{count_label}</h2>
            {move || match state.with(NameLogState::list_region) {
                ListRegion::Loading => view! { <div class="name-list__loading">"Loading..."</div> }.into_any(),
                ListRegion::Empty => view! { <div class="name-list__empty">"No names saved yet."</div> }.into_any(),
                ListRegion::Records => {
                    let records = state.with(|s| s.records.clone());
                    view! {
                        <ul class="name-list__items">
                            {records
                                .into_iter()
                                .map(|record| view! { <NameItem record=record/> })
                                .collect::<Vec<_>>()}
                        </ul>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

/// One row: the name and its locale-formatted creation time.
#[component]
fn NameItem(record: NameRecord) -> impl IntoView {
    let created = format_created_at(&record.created_at);
    let key = record.id.to_string();

    view! {
        <li class="name-list__item" data-id=key>
            <span class="name-list__name">{record.name}</span>
            <span class="name-list__date">{created}</span>
        </li>
    }
}
