use serde_json::{Value, json};

use super::launches::{LATEST_LAUNCHPAD, NEXT_LAUNCHPAD};

pub fn by_id(id: &str) -> Option<Value> {
    match id {
        LATEST_LAUNCHPAD => Some(json!({
            "name": "KSC LC 39A",
            "full_name": "Kennedy Space Center Historic Launch Complex 39A",
            "region": "Florida",
            "launch_attempts": 55,
            "launch_successes": 55,
            "id": LATEST_LAUNCHPAD
        })),
        NEXT_LAUNCHPAD => Some(json!({
            "name": "VAFB SLC 4E",
            "full_name": "Vandenberg Space Force Base Space Launch Complex 4E",
            "region": "California",
            "launch_attempts": 28,
            "launch_successes": 27,
            "id": NEXT_LAUNCHPAD
        })),
        _ => None,
    }
}
