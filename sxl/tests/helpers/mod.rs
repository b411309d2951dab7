// Shared fixtures for orchestrator tests; not every test binary uses all of them.
#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{Value, json};
use sxl::{FetchStrategy, Sxl, SxlConnector};
use sxl_mock::{DynamicMockConnector, DynamicMockController};

pub const BASE: &str = "http://mock.invalid/v4";
pub const LATEST_URL: &str = "http://mock.invalid/v4/launches/latest";
pub const NEXT_URL: &str = "http://mock.invalid/v4/launches/next";
pub const PAYLOAD_URL: &str = "http://mock.invalid/v4/payloads/p1";
pub const LAUNCHPAD_URL: &str = "http://mock.invalid/v4/launchpads/lp1";

pub fn launch_doc() -> Value {
    json!({
        "flight_number": 1,
        "name": "Test",
        "date_unix": 1_700_000_000,
        "payloads": "p1",
        "launchpad": "lp1",
        "success": true
    })
}

pub fn payload_doc() -> Value {
    json!({
        "name": "Sat",
        "type": "Comm",
        "customers": ["ACME"],
        "manufacturers": ["ACME"]
    })
}

pub fn launchpad_doc() -> Value {
    json!({
        "full_name": "Pad A",
        "region": "FL",
        "launch_successes": 9,
        "launch_attempts": 10
    })
}

/// Build an orchestrator over `connector` rooted at [`BASE`].
pub fn sxl_with(connector: Arc<dyn SxlConnector>, strategy: FetchStrategy) -> Sxl {
    Sxl::builder()
        .with_connector(connector)
        .api_base(BASE)
        .fetch_strategy(strategy)
        .build()
        .expect("valid test orchestrator")
}

/// A scripted mock answering the launch, payload, and launchpad fixtures.
pub async fn scripted(launch_url: &str) -> (Arc<dyn SxlConnector>, DynamicMockController) {
    let (mock, controller) = DynamicMockConnector::new_with_controller("scripted");
    controller.respond(launch_url, launch_doc()).await;
    controller.respond(PAYLOAD_URL, payload_doc()).await;
    controller.respond(LAUNCHPAD_URL, launchpad_doc()).await;
    (mock, controller)
}
