//! Canonical textual grammars for every scalar kind.
//!
//! Each grammar is a `format_*`/`parse_*` pair. Formatting is deterministic;
//! parsing is slightly more lenient than formatting so that hand-written
//! documents are accepted, but `parse(format(v)) == v` always holds.

pub mod complex;
pub mod duration;
pub mod float;

pub use complex::{format_complex128, format_complex64, parse_complex128, parse_complex64};
pub use duration::{format_duration, parse_duration};
pub use float::{format_f32, format_f64, parse_f32, parse_f64};

use chrono::{DateTime, Datelike, FixedOffset, SecondsFormat};

/// Formats a bool as `true` or `false`.
pub fn format_bool(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Parses a bool. Besides `true`/`false`, the spellings `1 t T TRUE True`
/// and `0 f F FALSE False` are accepted.
pub fn parse_bool(text: &str) -> Option<bool> {
    match text {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

/// Formats a timestamp as RFC 3339, keeping its offset.
///
/// UTC is written as `Z`; sub-second digits appear only when non-zero.
///
/// ```
/// use chrono::DateTime;
/// use typed_json::grammar::format_datetime;
///
/// let t = DateTime::parse_from_rfc3339("2024-01-01T09:30:00+02:00").unwrap();
/// assert_eq!(format_datetime(&t), "2024-01-01T09:30:00+02:00");
/// ```
pub fn format_datetime(value: &DateTime<FixedOffset>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Returns `true` if [`format_datetime`] writes `value` exactly.
///
/// RFC 3339 has no room for an offset with a seconds part or for a local
/// year outside `0000..=9999`.
pub fn datetime_is_representable(value: &DateTime<FixedOffset>) -> bool {
    value.offset().local_minus_utc() % 60 == 0 && (0..=9999).contains(&value.year())
}

/// Parses an RFC 3339 timestamp.
pub fn parse_datetime(text: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(text).ok()
}
