//! Failure classification and user-facing error messages.
//!
//! DESIGN
//! ======
//! A failed call is first captured as an `ApiFailure` (what the transport
//! saw) and then turned into a `ClientError` (what the user reads). Payload
//! shapes are recognized by walking an ordered matcher table; the first
//! matcher that produces a message wins, so supporting a new backend error
//! shape means adding one row, not another branch.
//!
//! Field presence follows JavaScript truthiness (null, false, 0 and "" count
//! as absent) because that is how the backend's own clients read these
//! payloads.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

pub const VALIDATION_MESSAGE: &str = "Please enter a name.";
pub const FETCH_FALLBACK_MESSAGE: &str = "Failed to load the name list.";
pub const CONNECTIVITY_MESSAGE: &str = "Cannot connect to the server. Check that the backend is running.";
pub const UNKNOWN_MESSAGE: &str = "An unknown error occurred.";
pub const NAME_FIELD_PREFIX: &str = "Name field error: ";

// =============================================================================
// TRANSPORT FAILURE
// =============================================================================

/// What went wrong at the HTTP layer.
#[derive(Clone, Debug, PartialEq)]
pub enum ApiFailure {
    /// The server answered with a non-success status. `body` is `None` when
    /// the response had no content.
    Response {
        status: u16,
        status_text: String,
        body: Option<Value>,
    },
    /// The request was sent but nothing came back.
    NoResponse(String),
    /// The request could not be built, or the success body was unusable.
    Request(String),
}

impl ApiFailure {
    /// Response payload, if the server sent one.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            Self::Response { body, .. } => body.as_ref(),
            Self::NoResponse(_) | Self::Request(_) => None,
        }
    }

    /// Server-side traceback attached to a structured error payload.
    pub fn traceback(&self) -> Option<&str> {
        self.payload()?.get("traceback")?.as_str().filter(|tb| !tb.is_empty())
    }
}

// =============================================================================
// USER-FACING ERROR
// =============================================================================

/// Errors surfaced to the user. `Display` is the exact banner text.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
    /// Blank input, rejected before any request.
    #[error("Please enter a name.")]
    Validation,

    /// The server was reached and answered with an error.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The request went out but no response arrived.
    #[error("{0}")]
    Network(String),

    /// The request could not be made or the outcome could not be classified.
    #[error("{0}")]
    Unknown(String),
}

impl ClientError {
    /// Classify a failed list fetch.
    pub fn from_fetch_failure(failure: &ApiFailure) -> Self {
        match failure {
            ApiFailure::Response { status, body, .. } => {
                let message = body
                    .as_ref()
                    .filter(|payload| is_truthy(payload))
                    .and_then(|payload| matched_message(FETCH_MATCHERS, payload))
                    .unwrap_or_else(|| FETCH_FALLBACK_MESSAGE.to_owned());
                Self::Api { status: *status, message }
            }
            ApiFailure::NoResponse(_) => Self::Network(FETCH_FALLBACK_MESSAGE.to_owned()),
            ApiFailure::Request(_) => Self::Unknown(FETCH_FALLBACK_MESSAGE.to_owned()),
        }
    }

    /// Classify a failed create request.
    pub fn from_submit_failure(failure: &ApiFailure) -> Self {
        match failure {
            ApiFailure::Response { status, status_text, body } => {
                let message = match body.as_ref().filter(|payload| is_truthy(payload)) {
                    Some(payload) => matched_message(SUBMIT_MATCHERS, payload).unwrap_or_else(|| payload.to_string()),
                    None => format!("Server error: {status} {status_text}").trim_end().to_owned(),
                };
                Self::Api { status: *status, message }
            }
            ApiFailure::NoResponse(_) => Self::Network(CONNECTIVITY_MESSAGE.to_owned()),
            ApiFailure::Request(description) => {
                let description = description.trim();
                if description.is_empty() {
                    Self::Unknown(UNKNOWN_MESSAGE.to_owned())
                } else {
                    Self::Unknown(description.to_owned())
                }
            }
        }
    }

    /// Short machine-readable kind for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Api { .. } => "api",
            Self::Network(_) => "network",
            Self::Unknown(_) => "unknown",
        }
    }
}

// =============================================================================
// PAYLOAD MATCHERS
// =============================================================================

/// One recognizable error-payload shape.
#[derive(Clone, Copy, Debug)]
pub struct PayloadMatcher {
    pub name: &'static str,
    pub extract: fn(&Value) -> Option<String>,
}

/// Shapes recognized on a failed list fetch, in priority order.
pub const FETCH_MATCHERS: &[PayloadMatcher] = &[
    PayloadMatcher { name: "error", extract: error_with_detail },
    PayloadMatcher { name: "detail", extract: detail_only },
    PayloadMatcher { name: "string", extract: plain_string },
];

/// Shapes recognized on a failed create, in priority order. The last row
/// always matches, so a structured payload never falls through silently.
pub const SUBMIT_MATCHERS: &[PayloadMatcher] = &[
    PayloadMatcher { name: "error", extract: error_with_detail },
    PayloadMatcher { name: "name", extract: name_field_messages },
    PayloadMatcher { name: "detail", extract: detail_only },
    PayloadMatcher { name: "string", extract: plain_string },
    PayloadMatcher { name: "json", extract: stringified },
];

/// Run `matchers` top to bottom and return the first message produced,
/// together with the name of the row that produced it.
pub fn first_match(matchers: &[PayloadMatcher], payload: &Value) -> Option<(&'static str, String)> {
    matchers
        .iter()
        .find_map(|matcher| (matcher.extract)(payload).map(|message| (matcher.name, message)))
}

fn matched_message(matchers: &[PayloadMatcher], payload: &Value) -> Option<String> {
    let (shape, message) = first_match(matchers, payload)?;
    leptos::logging::log!("error payload matched the {shape:?} shape");
    Some(message)
}

fn error_with_detail(payload: &Value) -> Option<String> {
    let error = field(payload, "error")?;
    let detail = field(payload, "detail").map(display).unwrap_or_default();
    Some(format!("{}: {detail}", display(error)))
}

fn name_field_messages(payload: &Value) -> Option<String> {
    let messages = match field(payload, "name")? {
        Value::Array(items) => items.iter().map(display).collect::<Vec<_>>().join(", "),
        other => display(other),
    };
    Some(format!("{NAME_FIELD_PREFIX}{messages}"))
}

fn detail_only(payload: &Value) -> Option<String> {
    field(payload, "detail").map(display)
}

fn plain_string(payload: &Value) -> Option<String> {
    payload.as_str().map(str::to_owned)
}

fn stringified(payload: &Value) -> Option<String> {
    Some(payload.to_string())
}

fn field<'a>(payload: &'a Value, key: &str) -> Option<&'a Value> {
    payload.as_object()?.get(key).filter(|value| is_truthy(value))
}

fn display(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

// =============================================================================
// DIAGNOSTICS
// =============================================================================

/// Log the raw failure for developers. The traceback, when the backend sent
/// one, goes on its own line so it stays readable in the console.
pub fn log_failure(context: &str, failure: &ApiFailure) {
    match failure {
        ApiFailure::Response { status, status_text, body } => {
            let payload = body.as_ref().map_or_else(|| "<empty>".to_owned(), Value::to_string);
            leptos::logging::error!("{context} failed: status={status} {status_text} payload={payload}");
        }
        ApiFailure::NoResponse(reason) => {
            leptos::logging::error!("{context} failed: no response: {reason}");
        }
        ApiFailure::Request(reason) => {
            leptos::logging::error!("{context} failed: request error: {reason}");
        }
    }
    if let Some(traceback) = failure.traceback() {
        leptos::logging::error!("{context} traceback:\n{traceback}");
    }
}
