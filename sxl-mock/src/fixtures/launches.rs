use serde_json::{Value, json};

pub const LATEST_PAYLOAD: &str = "62dd73e202a8e8260c8d72c0";
pub const LATEST_LAUNCHPAD: &str = "5e9e4502f509094188566f88";
pub const NEXT_PAYLOAD: &str = "6243ba08af52800c6e919270";
pub const NEXT_LAUNCHPAD: &str = "5e9e4501f509094ba4566f84";

pub fn by_id(id: &str) -> Option<Value> {
    match id {
        "latest" => Some(latest()),
        "next" => Some(next()),
        _ => None,
    }
}

fn latest() -> Value {
    json!({
        "flight_number": 187,
        "name": "Crew-5",
        "details": "SpaceX will launch the fifth operational crew mission to the ISS.",
        "date_unix": 1_664_985_600,
        "date_utc": "2022-10-05T16:00:00.000Z",
        "date_precision": "hour",
        "upcoming": false,
        "success": true,
        "payloads": [LATEST_PAYLOAD],
        "launchpad": LATEST_LAUNCHPAD,
        "id": "62dd70d5202306255024d139"
    })
}

fn next() -> Value {
    json!({
        "flight_number": 188,
        "name": "Starlink 4-36 (v1.5)",
        "details": null,
        "date_unix": 1_735_732_800,
        "date_utc": "2025-01-01T12:00:00.000Z",
        "date_precision": "hour",
        "upcoming": true,
        "success": null,
        "payloads": [NEXT_PAYLOAD],
        "launchpad": NEXT_LAUNCHPAD,
        "id": "62f3b4ff0f55c50e192a4e6c"
    })
}
