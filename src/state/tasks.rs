//! Async flows that talk to the backend and feed the reducer.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components spawn these on the UI thread with `leptos::task::spawn_local`.
//! Only one request is in flight at a time: a submit awaits its create call
//! and then awaits the refresh, it never fires both together. The health
//! check marks the page busy for its own duration, so no submit can start
//! while it is out.
//!
//! ERROR HANDLING
//! ==============
//! Each failure is logged in full via `log_failure`, reduced to one line with
//! `ClientError`, dispatched to the state, and returned to the caller. Nothing
//! is retried. A refresh that fails after a successful create reports the
//! refresh error; the create is not undone.

#[cfg(test)]
#[path = "tasks_test.rs"]
mod tasks_test;

use leptos::prelude::{RwSignal, Update};

use super::health::BackendHealth;
use super::names::{NameLogAction, NameLogState};
use crate::net::api::NamesApi;
use crate::net::error::{ApiFailure, ClientError, log_failure};

/// Sink for reducer actions.
pub trait NameLogStore {
    /// Apply `action`. Returns `false` once the owning view has been torn
    /// down, in which case the action was dropped.
    fn dispatch(&self, action: NameLogAction) -> bool;
}

impl NameLogStore for RwSignal<NameLogState> {
    fn dispatch(&self, action: NameLogAction) -> bool {
        self.try_update(|state| state.apply(action)).is_some()
    }
}

/// Log `failure`, classify it, and note which kind of error the user sees.
fn classify(context: &str, failure: &ApiFailure, to_error: fn(&ApiFailure) -> ClientError) -> ClientError {
    log_failure(context, failure);
    let err = to_error(failure);
    leptos::logging::warn!("{context}: showing {} error: {err}", err.kind());
    err
}

/// Load the list and replace the records with it.
///
/// # Errors
///
/// Returns the classified failure after it has been dispatched as
/// `FetchError`.
pub async fn fetch_list<A, S>(api: &A, store: &S) -> Result<(), ClientError>
where
    A: NamesApi,
    S: NameLogStore,
{
    if !store.dispatch(NameLogAction::FetchStart) {
        return Ok(());
    }

    match api.list_names().await {
        Ok(records) => {
            store.dispatch(NameLogAction::FetchSuccess(records));
            Ok(())
        }
        Err(failure) => {
            let err = classify("list names", &failure, ClientError::from_fetch_failure);
            store.dispatch(NameLogAction::FetchError(err.to_string()));
            Err(err)
        }
    }
}

/// Save a trimmed name, then refresh the list.
///
/// The refresh only runs after the create succeeded, and only while the view
/// is still alive.
///
/// # Errors
///
/// `ClientError::Validation` for blank input (no request is made), the
/// classified create failure, or the refresh failure.
pub async fn submit_name<A, S>(api: &A, store: &S, candidate: &str) -> Result<(), ClientError>
where
    A: NamesApi,
    S: NameLogStore,
{
    let name = candidate.trim();
    if name.is_empty() {
        let err = ClientError::Validation;
        store.dispatch(NameLogAction::SubmitError(err.to_string()));
        return Err(err);
    }

    if !store.dispatch(NameLogAction::SubmitStart) {
        return Ok(());
    }

    match api.create_name(name).await {
        Ok(Some(created)) => leptos::logging::log!("saved name {:?} (id {})", created.name, created.id),
        Ok(None) => leptos::logging::log!("saved name {name:?}"),
        Err(failure) => {
            let err = classify("save name", &failure, ClientError::from_submit_failure);
            store.dispatch(NameLogAction::SubmitError(err.to_string()));
            return Err(err);
        }
    }

    if !store.dispatch(NameLogAction::SubmitSuccess) {
        return Ok(());
    }
    fetch_list(api, store).await
}

/// Ask the backend how it is doing and record the answer.
///
/// Returns `None` without making a request once the view is gone.
pub async fn check_health<A, S>(api: &A, store: &S) -> Option<BackendHealth>
where
    A: NamesApi,
    S: NameLogStore,
{
    if !store.dispatch(NameLogAction::HealthStart) {
        return None;
    }

    let health = match api.check_health().await {
        Ok(report) => {
            if let Some(traceback) = report.traceback.as_deref().filter(|tb| !tb.is_empty()) {
                leptos::logging::error!("health check traceback:\n{traceback}");
            }
            BackendHealth::from_report(&report)
        }
        Err(failure) => {
            log_failure("health check", &failure);
            BackendHealth::Unreachable
        }
    };
    store.dispatch(NameLogAction::HealthChecked(health.clone()));
    Some(health)
}

/// First load on mount: the list, then the health check.
///
/// # Errors
///
/// Returns the list failure, if any. Health problems only show in the footer.
pub async fn load_initial<A, S>(api: &A, store: &S) -> Result<(), ClientError>
where
    A: NamesApi,
    S: NameLogStore,
{
    let listed = fetch_list(api, store).await;
    check_health(api, store).await;
    listed
}
