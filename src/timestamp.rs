//! Timestamp Conversion
//!
//! The sidebar stores timestamps as seconds from the platform reference epoch
//! of 2001-01-01T00:00:00 UTC, not the Unix epoch. Conversion never fails:
//! invalid input degrades to an empty string.

use chrono::{Local, LocalResult, SecondsFormat, TimeZone};

/// Seconds between the Unix epoch and 2001-01-01T00:00:00Z.
const REFERENCE_EPOCH_UNIX_SECS: i64 = 978_307_200;

/// Convert a seconds-from-2001 offset into a local ISO-8601 string.
///
/// Returns an empty string when the offset is non-positive, non-finite, or
/// out of the representable range.
pub fn convert_timestamp(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return String::new();
    }
    // `as` saturates on overflow; checked_add catches the saturated extreme.
    let offset = seconds.trunc() as i64;
    let unix_secs = match REFERENCE_EPOCH_UNIX_SECS.checked_add(offset) {
        Some(secs) => secs,
        None => return String::new(),
    };
    match Local.timestamp_opt(unix_secs, 0) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => {
            dt.to_rfc3339_opts(SecondsFormat::Secs, true)
        }
        LocalResult::None => String::new(),
    }
}
