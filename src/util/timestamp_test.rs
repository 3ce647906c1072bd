use super::*;

#[test]
fn formats_utc_timestamp() {
    assert_eq!(format_rfc3339("2024-01-01T00:00:00Z").as_deref(), Some("2024-01-01 00:00:00"));
}

#[test]
fn keeps_original_offset_and_drops_fraction() {
    assert_eq!(
        format_rfc3339("2024-03-09T17:05:42.123456+09:00").as_deref(),
        Some("2024-03-09 17:05:42")
    );
}

#[test]
fn rejects_timestamp_without_offset() {
    assert_eq!(format_rfc3339("2024-01-01T00:00:00"), None);
}

#[test]
fn unparseable_input_is_shown_verbatim() {
    assert_eq!(format_created_at("yesterday"), "yesterday");
}

#[test]
fn created_at_uses_rfc3339_rendering_natively() {
    assert_eq!(format_created_at("2024-01-01T00:00:00Z"), "2024-01-01 00:00:00");
}
