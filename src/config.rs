//! Backend endpoint configuration.
//!
//! The base URL is a build-time constant. `NAMELOG_API_BASE_URL` set in the
//! environment of the build overrides the default; there is no runtime
//! configuration in the browser.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000/api";

/// Longest name the backend will store. Used as the input's `maxlength`.
pub const MAX_NAME_LEN: usize = 100;

/// Resolve the API base URL without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("NAMELOG_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
}

fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// List/create collection endpoint, `{base}/names/`.
pub fn names_endpoint(base: &str) -> String {
    format!("{base}/names/")
}

/// Backend health endpoint, `{base}/health/`.
pub fn health_endpoint(base: &str) -> String {
    format!("{base}/health/")
}
