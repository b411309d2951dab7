use chrono::{DateTime, Datelike, Utc};

use crate::UNKNOWN;

/// IMF-fixdate layout from RFC 7231, e.g. `Tue, 14 Nov 2023 22:13:20 GMT`.
const IMF_FIXDATE: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Format a launch epoch for display.
///
/// Absent or zero epochs (and epochs outside four-digit years) yield
/// [`UNKNOWN`] and log a warning.
#[must_use]
pub fn format_launch_date(epoch: Option<i64>) -> String {
    if let Some(formatted) = epoch.filter(|e| *e != 0).and_then(imf_fixdate) {
        return formatted;
    }
    tracing::warn!(?epoch, "no launch date value exists; displaying {UNKNOWN}");
    UNKNOWN.to_string()
}

/// Format Unix seconds (UTC) as IMF-fixdate.
///
/// Returns `None` when the instant is not representable with a four-digit year.
#[must_use]
pub fn imf_fixdate(epoch: i64) -> Option<String> {
    let dt = DateTime::<Utc>::from_timestamp(epoch, 0)?;
    if !(0..=9999).contains(&dt.year()) {
        return None;
    }
    Some(dt.format(IMF_FIXDATE).to_string())
}
