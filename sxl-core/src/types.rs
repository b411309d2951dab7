//! Launch, payload, and launchpad records.
//!
//! Optional API fields are kept as `Option`s; sentinels are only applied when
//! a record is turned into display text.

use core::fmt;

/// Sentinel shown in place of a missing value.
pub const UNKNOWN: &str = "UNKNOWN";

/// Summary shown when a dependent lookup could not be made at all.
pub const UNKNOWN_SUMMARY: &str = "Unknown";

/// One launch as returned by `/launches/latest` or `/launches/next`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchRecord {
    /// `flight_number`
    pub flight_number: Option<i64>,
    /// `name`
    pub flight_name: Option<String>,
    /// `details`
    pub details: Option<String>,
    /// `date_unix`, Unix seconds.
    pub launch_epoch: Option<i64>,
    /// First id of `payloads`, used to build the payload lookup URL.
    pub payload_ref: Option<String>,
    /// `launchpad`, used to build the launchpad lookup URL.
    pub launchpad_ref: Option<String>,
    /// `success`; absent until the flight has happened.
    pub succeeded: Option<bool>,
    /// `date_precision` (e.g. "hour", "day", "month").
    pub date_precision: Option<String>,
}

/// Fields of a `/payloads/{id}` response used for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadSummary {
    /// `name`
    pub name: Option<String>,
    /// `type`
    pub kind: Option<String>,
    /// `customers`
    pub customers: Option<Vec<String>>,
    /// `manufacturers`
    pub manufacturers: Option<Vec<String>>,
}

impl fmt::Display for PayloadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Payload is: {} ({}) for customer: {}. Payload manufactured by: {}.",
            or_unknown(self.name.as_deref(), "name"),
            or_unknown(self.kind.as_deref(), "type"),
            list_or_unknown(self.customers.as_deref(), "customer"),
            list_or_unknown(self.manufacturers.as_deref(), "manufacturer"),
        )
    }
}

/// Fields of a `/launchpads/{id}` response used for display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchpadSummary {
    /// `full_name`
    pub full_name: Option<String>,
    /// `region`
    pub region: Option<String>,
    /// `launch_successes`
    pub launch_successes: Option<u64>,
    /// `launch_attempts`
    pub launch_attempts: Option<u64>,
}

impl fmt::Display for LaunchpadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}). Launched {} of {} attempts.",
            or_unknown(self.full_name.as_deref(), "full name"),
            or_unknown(self.region.as_deref(), "region"),
            count_or_unknown(self.launch_successes, "successes"),
            count_or_unknown(self.launch_attempts, "attempts"),
        )
    }
}

/// A launch merged with its formatted date and dependent lookups.
///
/// Every display field is populated, so rendering never sees a gap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedLaunch {
    /// The launch as extracted from the primary fetch.
    pub launch: LaunchRecord,
    /// IMF-fixdate launch date or [`UNKNOWN`].
    pub display_date: String,
    /// Payload sentence or [`UNKNOWN_SUMMARY`].
    pub payload_summary: String,
    /// Launchpad sentence or [`UNKNOWN_SUMMARY`].
    pub launchpad_summary: String,
}

fn or_unknown(value: Option<&str>, field: &str) -> String {
    value.map_or_else(|| format!("{UNKNOWN} {field}"), str::to_string)
}

fn list_or_unknown(values: Option<&[String]>, field: &str) -> String {
    match values {
        Some(v) if !v.is_empty() => v.join(", "),
        _ => format!("{UNKNOWN} {field}"),
    }
}

fn count_or_unknown(value: Option<u64>, field: &str) -> String {
    value.map_or_else(|| format!("{UNKNOWN} {field}"), |n| n.to_string())
}
