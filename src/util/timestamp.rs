//! Rendering of record creation timestamps.
//!
//! In the browser the user's locale decides the format (`Date.toLocaleString`).
//! Native builds fall back to a fixed `YYYY-MM-DD HH:MM:SS` rendering in the
//! timestamp's own offset.

#[cfg(test)]
#[path = "timestamp_test.rs"]
mod timestamp_test;

use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;

/// Human-readable form of a backend timestamp. Input that cannot be parsed
/// is returned unchanged.
pub fn format_created_at(raw: &str) -> String {
    #[cfg(feature = "csr")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if date.get_time().is_nan() {
            return raw.to_owned();
        }
        String::from(date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "csr"))]
    {
        format_rfc3339(raw).unwrap_or_else(|| raw.to_owned())
    }
}

/// `YYYY-MM-DD HH:MM:SS` for an RFC 3339 timestamp, `None` if it does not parse.
pub fn format_rfc3339(raw: &str) -> Option<String> {
    let parsed = OffsetDateTime::parse(raw.trim(), &Rfc3339).ok()?;
    parsed
        .format(format_description!("[year]-[month]-[day] [hour]:[minute]:[second]"))
        .ok()
}
