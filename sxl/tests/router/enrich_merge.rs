use std::sync::Arc;

use serde_json::json;
use sxl::{FetchStrategy, Resource, Style, Sxl, render};
use sxl_mock::{DynamicMockConnector, MockConnector};

use crate::helpers::{
    LATEST_URL, LAUNCHPAD_URL, NEXT_URL, PAYLOAD_URL, launch_doc, payload_doc, scripted, sxl_with,
};

#[tokio::test]
async fn end_to_end_fixture_renders_merged_block() {
    let (mock, controller) = scripted(LATEST_URL).await;
    let sxl = sxl_with(mock, FetchStrategy::Sequential);

    let launch = sxl.launch(Resource::Latest).await.unwrap();
    let text = render(&launch, Resource::Latest, Style::Plain);

    assert!(text.starts_with("Latest SpaceX Launch 🚀\n"));
    assert!(text.contains("Flight Number     : 1\n"));
    assert!(text.contains("Flight Name       : Test\n"));
    assert!(text.contains("Launch Date       : Tue, 14 Nov 2023 22:13:20 GMT\n"));
    assert!(text.contains("Launchpad         : Pad A (FL). Launched 9 of 10 attempts.\n"));
    assert!(text.contains("Flight Successful : true\n"));
    assert!(text.contains(
        "Payload is: Sat (Comm) for customer: ACME. Payload manufactured by: ACME."
    ));
    assert!(text.contains("Flight Details:\nNone available\n"));

    assert_eq!(
        controller.requests().await,
        vec![LATEST_URL, PAYLOAD_URL, LAUNCHPAD_URL]
    );
}

#[tokio::test]
async fn enrich_accepts_any_launch_url() {
    let (mock, _controller) = scripted(NEXT_URL).await;
    let sxl = sxl_with(mock, FetchStrategy::Sequential);

    let launch = sxl.enrich(NEXT_URL).await.unwrap();
    assert_eq!(launch.launch.flight_number, Some(1));
    assert_eq!(launch.display_date, "Tue, 14 Nov 2023 22:13:20 GMT");
}

#[tokio::test]
async fn missing_payload_fields_render_sentinels() {
    let (mock, controller) = scripted(LATEST_URL).await;
    controller
        .respond(PAYLOAD_URL, json!({ "name": "Sat", "customers": null }))
        .await;
    let sxl = sxl_with(mock, FetchStrategy::Sequential);

    let launch = sxl.launch(Resource::Latest).await.unwrap();
    assert_eq!(
        launch.payload_summary,
        "Payload is: Sat (UNKNOWN type) for customer: UNKNOWN customer. \
         Payload manufactured by: UNKNOWN manufacturer."
    );
    let text = render(&launch, Resource::Latest, Style::Plain);
    assert!(!text.contains("undefined"));
    assert!(!text.contains("null"));
}

#[tokio::test]
async fn missing_references_skip_lookups() {
    let (mock, controller) = DynamicMockConnector::new_with_controller("no-refs");
    controller
        .respond(
            LATEST_URL,
            json!({ "flight_number": 7, "name": "Orphan", "payloads": [], "launchpad": null }),
        )
        .await;
    let sxl = sxl_with(mock, FetchStrategy::Sequential);

    let launch = sxl.launch(Resource::Latest).await.unwrap();
    assert_eq!(launch.payload_summary, "Unknown");
    assert_eq!(launch.launchpad_summary, "Unknown");
    assert_eq!(launch.display_date, "UNKNOWN");
    assert_eq!(controller.requests().await, vec![LATEST_URL]);
}

#[tokio::test]
async fn first_payload_id_of_array_is_used() {
    let (mock, controller) = scripted(LATEST_URL).await;
    let mut doc = launch_doc();
    doc["payloads"] = json!(["p1", "p2"]);
    controller.respond(LATEST_URL, doc).await;
    controller
        .respond("http://mock.invalid/v4/payloads/p2", payload_doc())
        .await;
    let sxl = sxl_with(mock, FetchStrategy::Sequential);

    sxl.launch(Resource::Latest).await.unwrap();
    let requests = controller.requests().await;
    assert!(requests.iter().any(|u| u == PAYLOAD_URL));
    assert!(!requests.iter().any(|u| u.ends_with("/payloads/p2")));
}

#[tokio::test]
async fn static_fixtures_enrich_both_resources() {
    let sxl = Sxl::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();
    assert_eq!(sxl.connector_name(), "sxl-mock");

    let latest = sxl.launch(Resource::Latest).await.unwrap();
    assert_eq!(latest.display_date, "Wed, 05 Oct 2022 16:00:00 GMT");
    assert_eq!(
        latest.payload_summary,
        "Payload is: Crew-5 (Crew Dragon) for customer: NASA (CCtCap). \
         Payload manufactured by: SpaceX."
    );
    assert_eq!(
        latest.launchpad_summary,
        "Kennedy Space Center Historic Launch Complex 39A (Florida). Launched 55 of 55 attempts."
    );

    let next = sxl.launch(Resource::Next).await.unwrap();
    let text = render(&next, Resource::Next, Style::Plain);
    assert!(text.contains("Flight Name       : Starlink 4-36 (v1.5)\n"));
    assert!(text.contains(
        "Launch Date       : Wed, 01 Jan 2025 12:00:00 GMT [Precision: HOUR]\n"
    ));
    assert!(text.contains("Flight Successful : Awaiting launch\n"));
    assert!(text.contains("Payload manufactured by: UNKNOWN manufacturer."));
    assert!(text.contains("Launched 27 of 28 attempts."));
}
