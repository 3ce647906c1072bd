//! REST calls against the name log backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call fails with an `ApiFailure::Request` since the
//! transport only exists in the browser. Tests drive the state tasks through
//! their own `NamesApi` implementation instead.
//!
//! ERROR HANDLING
//! ==============
//! Calls return `Result<_, ApiFailure>` and never panic. Non-2xx bodies are
//! kept (JSON when parseable, raw text otherwise) so `ClientError` can pick
//! the message out of whatever shape the backend sent.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiFailure;
use super::types::{HealthReport, NameRecord};
#[cfg(any(test, feature = "csr"))]
use super::types::NameListResponse;
#[cfg(any(test, feature = "csr"))]
use serde_json::Value;

/// Backend operations the page needs. Implementations run on the single UI
/// thread, so the returned futures are not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait NamesApi {
    /// `GET {base}/names/`, normalized to a flat list.
    async fn list_names(&self) -> Result<Vec<NameRecord>, ApiFailure>;

    /// `POST {base}/names/` with `{ "name": name }`. Returns the created
    /// record when the response body carries one.
    async fn create_name(&self, name: &str) -> Result<Option<NameRecord>, ApiFailure>;

    /// `GET {base}/health/`.
    async fn check_health(&self) -> Result<HealthReport, ApiFailure>;
}

/// `NamesApi` over HTTP.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpNamesApi {
    base_url: String,
}

impl HttpNamesApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for HttpNamesApi {
    fn default() -> Self {
        Self::new(crate::config::api_base_url())
    }
}

impl NamesApi for HttpNamesApi {
    async fn list_names(&self) -> Result<Vec<NameRecord>, ApiFailure> {
        #[cfg(feature = "csr")]
        {
            let url = crate::config::names_endpoint(&self.base_url);
            log::debug!("GET {url}");
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiFailure::NoResponse(e.to_string()))?;
            let text = read_success_body(&resp).await?;
            decode_name_list(&text)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable())
        }
    }

    async fn create_name(&self, name: &str) -> Result<Option<NameRecord>, ApiFailure> {
        #[cfg(feature = "csr")]
        {
            let url = crate::config::names_endpoint(&self.base_url);
            let body = super::types::CreateNameRequest { name: name.to_owned() };
            log::debug!("POST {url}");
            let resp = gloo_net::http::Request::post(&url)
                .json(&body)
                .map_err(|e| ApiFailure::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiFailure::NoResponse(e.to_string()))?;
            let text = read_success_body(&resp).await?;
            Ok(serde_json::from_str::<NameRecord>(&text).ok())
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = name;
            Err(unavailable())
        }
    }

    async fn check_health(&self) -> Result<HealthReport, ApiFailure> {
        #[cfg(feature = "csr")]
        {
            let url = crate::config::health_endpoint(&self.base_url);
            log::debug!("GET {url}");
            let resp = gloo_net::http::Request::get(&url)
                .send()
                .await
                .map_err(|e| ApiFailure::NoResponse(e.to_string()))?;
            let text = resp.text().await.map_err(|e| ApiFailure::Request(e.to_string()))?;
            decode_health(resp.status(), &resp.status_text(), &text)
        }
        #[cfg(not(feature = "csr"))]
        {
            Err(unavailable())
        }
    }
}

#[cfg(not(feature = "csr"))]
fn unavailable() -> ApiFailure {
    ApiFailure::Request("not available outside the browser".to_owned())
}

/// Return the body of a 2xx response, or the classified failure otherwise.
#[cfg(feature = "csr")]
async fn read_success_body(resp: &gloo_net::http::Response) -> Result<String, ApiFailure> {
    let status = resp.status();
    let status_text = resp.status_text();
    let text = resp.text().await.map_err(|e| ApiFailure::Request(e.to_string()))?;
    if resp.ok() {
        Ok(text)
    } else {
        Err(failure_from_response(status, &status_text, &text))
    }
}

#[cfg(any(test, feature = "csr"))]
fn failure_from_response(status: u16, status_text: &str, text: &str) -> ApiFailure {
    ApiFailure::Response {
        status,
        status_text: status_text_or_reason(status, status_text),
        body: decode_error_body(text),
    }
}

/// Parse an error body: JSON when possible, raw text otherwise, `None` when empty.
#[cfg(any(test, feature = "csr"))]
fn decode_error_body(text: &str) -> Option<Value> {
    if text.trim().is_empty() {
        return None;
    }
    Some(serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_owned())))
}

#[cfg(any(test, feature = "csr"))]
fn decode_name_list(text: &str) -> Result<Vec<NameRecord>, ApiFailure> {
    serde_json::from_str::<NameListResponse>(text)
        .map(NameListResponse::into_records)
        .map_err(|e| ApiFailure::Request(format!("unexpected name list response: {e}")))
}

/// The health route reports failures in its body with a 500, so a readable
/// report is returned regardless of status.
#[cfg(any(test, feature = "csr"))]
fn decode_health(status: u16, status_text: &str, text: &str) -> Result<HealthReport, ApiFailure> {
    match serde_json::from_str::<HealthReport>(text) {
        Ok(report) => Ok(report),
        Err(e) if (200..300).contains(&status) => {
            Err(ApiFailure::Request(format!("unexpected health response: {e}")))
        }
        Err(_) => Err(failure_from_response(status, status_text, text)),
    }
}

/// HTTP/2 responses carry no reason phrase; fall back to the standard one.
#[cfg(any(test, feature = "csr"))]
fn status_text_or_reason(status: u16, status_text: &str) -> String {
    if !status_text.is_empty() {
        return status_text.to_owned();
    }
    let reason = match status {
        400 => "Bad Request",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        409 => "Conflict",
        413 => "Payload Too Large",
        415 => "Unsupported Media Type",
        422 => "Unprocessable Entity",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        _ => "",
    };
    reason.to_owned()
}
