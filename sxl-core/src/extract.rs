//! Extraction never fails: a missing, `null`, or wrongly-typed field becomes
//! `None` and is rendered with a sentinel later.

use serde_json::Value;

use crate::{LaunchRecord, LaunchpadSummary, PayloadSummary};

/// Map a launch document into a [`LaunchRecord`].
///
/// `payloads` is an array of ids in the v4 API; a bare string id is accepted
/// too. Only the first id is used for the payload lookup.
#[must_use]
pub fn extract_launch(json: &Value) -> LaunchRecord {
    LaunchRecord {
        flight_number: json.get("flight_number").and_then(Value::as_i64),
        flight_name: text(json, "name"),
        details: text(json, "details"),
        launch_epoch: json.get("date_unix").and_then(Value::as_i64),
        payload_ref: first_id(json.get("payloads")),
        launchpad_ref: text(json, "launchpad"),
        succeeded: json.get("success").and_then(Value::as_bool),
        date_precision: text(json, "date_precision"),
    }
}

/// Map a payload document into a [`PayloadSummary`].
#[must_use]
pub fn extract_payload(json: &Value) -> PayloadSummary {
    PayloadSummary {
        name: text(json, "name"),
        kind: text(json, "type"),
        customers: text_list(json, "customers"),
        manufacturers: text_list(json, "manufacturers"),
    }
}

/// Map a launchpad document into a [`LaunchpadSummary`].
#[must_use]
pub fn extract_launchpad(json: &Value) -> LaunchpadSummary {
    LaunchpadSummary {
        full_name: text(json, "full_name"),
        region: text(json, "region"),
        launch_successes: json.get("launch_successes").and_then(Value::as_u64),
        launch_attempts: json.get("launch_attempts").and_then(Value::as_u64),
    }
}

fn text(json: &Value, key: &str) -> Option<String> {
    json.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
}

fn text_list(json: &Value, key: &str) -> Option<Vec<String>> {
    let items: Vec<String> = json
        .get(key)?
        .as_array()?
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect();
    Some(items)
}

fn first_id(value: Option<&Value>) -> Option<String> {
    let id = match value? {
        Value::String(id) => Some(id.as_str()),
        Value::Array(ids) => ids.iter().find_map(Value::as_str),
        _ => None,
    };
    id.filter(|id| !id.is_empty()).map(str::to_string)
}
