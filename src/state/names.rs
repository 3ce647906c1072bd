//! Name log page state and its reducer.
//!
//! DESIGN
//! ======
//! Every change goes through `NameLogState::apply` with a named action, so the
//! loading/error/draft reset rules live in one place:
//!
//! ```text
//! State + Action  ->  apply()  ->  next State
//! ```
//!
//! - the error message is cleared when any request starts and on a
//!   successful fetch
//! - the draft is cleared only by a successful submit
//! - `is_loading` is true from a `*Start` action until its matching
//!   success/error action
//! - `health_pending` is true from `HealthStart` until `HealthChecked`; the
//!   page counts as busy while either flag is set

#[cfg(test)]
#[path = "names_test.rs"]
mod names_test;

use super::health::BackendHealth;
use crate::net::types::NameRecord;

/// Everything the page renders.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NameLogState {
    pub draft_name: String,
    /// In server response order; replaced wholesale on every fetch.
    pub records: Vec<NameRecord>,
    pub is_loading: bool,
    /// Empty when there is nothing to report.
    pub error_message: String,
    /// `None` until the first health check returns.
    pub health: Option<BackendHealth>,
    /// A `/health/` request is in flight.
    pub health_pending: bool,
}

/// Named state transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NameLogAction {
    /// The input field changed.
    DraftChanged(String),
    FetchStart,
    FetchSuccess(Vec<NameRecord>),
    FetchError(String),
    SubmitStart,
    SubmitSuccess,
    SubmitError(String),
    HealthStart,
    HealthChecked(BackendHealth),
}

impl NameLogAction {
    /// Upper-snake name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DraftChanged(_) => "DRAFT_CHANGED",
            Self::FetchStart => "FETCH_START",
            Self::FetchSuccess(_) => "FETCH_SUCCESS",
            Self::FetchError(_) => "FETCH_ERROR",
            Self::SubmitStart => "SUBMIT_START",
            Self::SubmitSuccess => "SUBMIT_SUCCESS",
            Self::SubmitError(_) => "SUBMIT_ERROR",
            Self::HealthStart => "HEALTH_START",
            Self::HealthChecked(_) => "HEALTH_CHECKED",
        }
    }
}

/// What the list region shows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListRegion {
    /// Loading with nothing to show yet.
    Loading,
    Empty,
    Records,
}

impl NameLogState {
    pub fn apply(&mut self, action: NameLogAction) {
        match action {
            NameLogAction::DraftChanged(draft) => {
                self.draft_name = draft;
            }
            NameLogAction::FetchStart | NameLogAction::SubmitStart => {
                self.is_loading = true;
                self.error_message.clear();
            }
            NameLogAction::FetchSuccess(records) => {
                self.records = records;
                self.error_message.clear();
                self.is_loading = false;
            }
            NameLogAction::FetchError(message) | NameLogAction::SubmitError(message) => {
                self.error_message = message;
                self.is_loading = false;
            }
            NameLogAction::SubmitSuccess => {
                self.draft_name.clear();
                self.is_loading = false;
            }
            NameLogAction::HealthStart => {
                self.health_pending = true;
            }
            NameLogAction::HealthChecked(health) => {
                self.health = Some(health);
                self.health_pending = false;
            }
        }
    }

    /// The loading indicator only replaces the list when there is no list to
    /// keep showing; a refresh over existing records leaves them in place.
    pub fn list_region(&self) -> ListRegion {
        if self.records.is_empty() {
            if self.is_loading { ListRegion::Loading } else { ListRegion::Empty }
        } else {
            ListRegion::Records
        }
    }

    pub fn count_label(&self) -> String {
        format!("Saved names ({})", self.records.len())
    }

    pub fn has_error(&self) -> bool {
        !self.error_message.is_empty()
    }

    /// Any request in flight, list/create or health. Input is locked while
    /// busy so a create never overlaps another request.
    pub fn is_busy(&self) -> bool {
        self.is_loading || self.health_pending
    }

    /// The submit button is live only when idle with a non-blank draft.
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && !self.draft_name.trim().is_empty()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.is_loading { "Saving..." } else { "Save" }
    }
}
