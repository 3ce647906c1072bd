//! Name input form with the save button.

use leptos::prelude::*;

use crate::config::MAX_NAME_LEN;
use crate::net::api::HttpNamesApi;
use crate::state::names::{NameLogAction, NameLogState};
use crate::state::tasks::{NameLogStore, submit_name};

/// Text input plus submit button. Both are disabled while any request is out;
/// the button also stays disabled for a blank draft.
#[component]
pub fn NameForm() -> impl IntoView {
    let state = expect_context::<RwSignal<NameLogState>>();
    let api = expect_context::<HttpNamesApi>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let candidate = state.with_untracked(|s| s.draft_name.clone());
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let _ = submit_name(&api, &state, &candidate).await;
        });
    };

    let draft = move || state.with(|s| s.draft_name.clone());
    let busy = move || state.with(NameLogState::is_busy);
    let can_submit = move || state.with(NameLogState::can_submit);
    let submit_label = move || state.with(NameLogState::submit_label);

    view! {
        <form class="name-form" on:submit=on_submit>
            <div class="name-form__group">
                <input
                    class="name-form__input"
                    type="text"
                    placeholder="Enter a name"
                    maxlength=MAX_NAME_LEN.to_string()
                    prop:value=draft
                    on:input=move |ev| {
                        state.dispatch(NameLogAction::DraftChanged(event_target_value(&ev)));
                    }
                    disabled=busy
                />
                <button class="btn btn--primary name-form__submit" type="submit" disabled=move || !can_submit()>
                    {submit_label}
                </button>
            </div>
        </form>
    }
}
