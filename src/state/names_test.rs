use super::*;
use crate::net::types::RecordId;

// =============================================================
// Helpers
// =============================================================

fn record(id: i64, name: &str) -> NameRecord {
    NameRecord {
        id: RecordId::Number(id),
        name: name.to_owned(),
        created_at: "2024-01-01T00:00:00Z".to_owned(),
    }
}

fn state_with(records: Vec<NameRecord>) -> NameLogState {
    NameLogState { records, ..NameLogState::default() }
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn default_state_is_idle_and_empty() {
    let state = NameLogState::default();
    assert!(state.draft_name.is_empty());
    assert!(state.records.is_empty());
    assert!(!state.is_loading);
    assert!(!state.has_error());
    assert!(state.health.is_none());
}

// =============================================================
// Reducer
// =============================================================

#[test]
fn fetch_start_sets_loading_and_clears_error() {
    let mut state = NameLogState { error_message: "old".to_owned(), ..NameLogState::default() };
    state.apply(NameLogAction::FetchStart);
    assert!(state.is_loading);
    assert!(!state.has_error());
}

#[test]
fn fetch_success_replaces_records_wholesale() {
    let mut state = state_with(vec![record(1, "Kim"), record(2, "Park")]);
    state.apply(NameLogAction::FetchStart);
    state.apply(NameLogAction::FetchSuccess(vec![record(3, "Lee")]));
    assert_eq!(state.records, vec![record(3, "Lee")]);
    assert!(!state.is_loading);
}

#[test]
fn fetch_error_keeps_records_and_sets_message() {
    let mut state = state_with(vec![record(1, "Kim")]);
    state.apply(NameLogAction::FetchStart);
    state.apply(NameLogAction::FetchError("list failed: boom".to_owned()));
    assert_eq!(state.records.len(), 1);
    assert_eq!(state.error_message, "list failed: boom");
    assert!(!state.is_loading);
}

#[test]
fn submit_success_clears_draft_only() {
    let mut state = NameLogState { draft_name: "Lee".to_owned(), ..state_with(vec![record(1, "Kim")]) };
    state.apply(NameLogAction::SubmitStart);
    state.apply(NameLogAction::SubmitSuccess);
    assert!(state.draft_name.is_empty());
    assert_eq!(state.records.len(), 1);
    assert!(!state.is_loading);
}

#[test]
fn submit_error_keeps_draft() {
    let mut state = NameLogState { draft_name: "Lee".to_owned(), ..NameLogState::default() };
    state.apply(NameLogAction::SubmitStart);
    state.apply(NameLogAction::SubmitError("Name field error: too long".to_owned()));
    assert_eq!(state.draft_name, "Lee");
    assert_eq!(state.error_message, "Name field error: too long");
    assert!(!state.is_loading);
}

#[test]
fn draft_changed_does_not_touch_error() {
    let mut state = NameLogState { error_message: "E: D".to_owned(), ..NameLogState::default() };
    state.apply(NameLogAction::DraftChanged("K".to_owned()));
    assert_eq!(state.draft_name, "K");
    assert_eq!(state.error_message, "E: D");
}

#[test]
fn health_checked_is_stored_without_touching_loading() {
    let mut state = NameLogState { is_loading: true, ..NameLogState::default() };
    state.apply(NameLogAction::HealthChecked(BackendHealth::Unreachable));
    assert_eq!(state.health, Some(BackendHealth::Unreachable));
    assert!(state.is_loading);
}

#[test]
fn action_names_match_transition_labels() {
    assert_eq!(NameLogAction::FetchStart.name(), "FETCH_START");
    assert_eq!(NameLogAction::FetchSuccess(Vec::new()).name(), "FETCH_SUCCESS");
    assert_eq!(NameLogAction::FetchError(String::new()).name(), "FETCH_ERROR");
    assert_eq!(NameLogAction::SubmitStart.name(), "SUBMIT_START");
    assert_eq!(NameLogAction::SubmitSuccess.name(), "SUBMIT_SUCCESS");
    assert_eq!(NameLogAction::SubmitError(String::new()).name(), "SUBMIT_ERROR");
    assert_eq!(NameLogAction::HealthStart.name(), "HEALTH_START");
}

// =============================================================
// View derivations
// =============================================================

#[test]
fn list_region_shows_loading_only_when_empty() {
    let mut state = NameLogState::default();
    assert_eq!(state.list_region(), ListRegion::Empty);

    state.apply(NameLogAction::FetchStart);
    assert_eq!(state.list_region(), ListRegion::Loading);

    let mut refreshing = state_with(vec![record(1, "Kim")]);
    refreshing.apply(NameLogAction::FetchStart);
    assert_eq!(refreshing.list_region(), ListRegion::Records);
}

#[test]
fn count_label_reflects_record_count() {
    assert_eq!(state_with(vec![record(1, "Kim")]).count_label(), "Saved names (1)");
    assert_eq!(NameLogState::default().count_label(), "Saved names (0)");
}

#[test]
fn can_submit_requires_idle_and_non_blank_draft() {
    let mut state = NameLogState { draft_name: "   ".to_owned(), ..NameLogState::default() };
    assert!(!state.can_submit());

    state.draft_name = " Lee ".to_owned();
    assert!(state.can_submit());

    state.is_loading = true;
    assert!(!state.can_submit());
    assert_eq!(state.submit_label(), "Saving...");
}

#[test]
fn pending_health_check_blocks_submit() {
    let mut state = NameLogState { draft_name: "Lee".to_owned(), ..NameLogState::default() };
    state.apply(NameLogAction::HealthStart);
    assert!(state.is_busy());
    assert!(!state.can_submit());
    assert_eq!(state.submit_label(), "Save");

    state.apply(NameLogAction::HealthChecked(BackendHealth::Unreachable));
    assert!(!state.is_busy());
    assert!(state.can_submit());
}
