use serde_json::{Value, json};

use super::launches::{LATEST_PAYLOAD, NEXT_PAYLOAD};

pub fn by_id(id: &str) -> Option<Value> {
    match id {
        LATEST_PAYLOAD => Some(json!({
            "name": "Crew-5",
            "type": "Crew Dragon",
            "customers": ["NASA (CCtCap)"],
            "manufacturers": ["SpaceX"],
            "id": LATEST_PAYLOAD
        })),
        NEXT_PAYLOAD => Some(json!({
            "name": "Starlink 4-36 (v1.5)",
            "type": "Satellite",
            "customers": ["SpaceX"],
            "manufacturers": [],
            "id": NEXT_PAYLOAD
        })),
        _ => None,
    }
}
