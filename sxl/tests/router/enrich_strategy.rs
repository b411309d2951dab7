use std::time::Duration;

use sxl::{FetchStrategy, Resource, ResourceKind};
use sxl_mock::MockBehavior;

use crate::helpers::{LATEST_URL, LAUNCHPAD_URL, PAYLOAD_URL, scripted, sxl_with};

#[tokio::test]
async fn concurrent_strategy_matches_sequential_output() {
    let (seq_mock, _c1) = scripted(LATEST_URL).await;
    let (con_mock, c2) = scripted(LATEST_URL).await;

    let sequential = sxl_with(seq_mock, FetchStrategy::Sequential)
        .launch(Resource::Latest)
        .await
        .unwrap();
    let concurrent = sxl_with(con_mock, FetchStrategy::Concurrent)
        .launch(Resource::Latest)
        .await
        .unwrap();

    assert_eq!(sequential, concurrent);
    let requests = c2.requests().await;
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0], LATEST_URL);
}

#[tokio::test]
async fn concurrent_strategy_prefers_payload_error() {
    let (mock, controller) = scripted(LATEST_URL).await;
    controller
        .fail_with_status(PAYLOAD_URL, 502, "Bad Gateway")
        .await;
    controller
        .fail_with_status(LAUNCHPAD_URL, 503, "Service Unavailable")
        .await;
    let sxl = sxl_with(mock, FetchStrategy::Concurrent);

    let err = sxl.launch(Resource::Latest).await.unwrap_err();
    assert_eq!(err.kind(), Some(ResourceKind::Payload));
    // Both lookups were issued before the failure was reported
    assert_eq!(controller.requests().await.len(), 3);
}

#[tokio::test]
async fn concurrent_strategy_keeps_both_lookups_in_flight() {
    let (mock, controller) = scripted(LATEST_URL).await;
    controller
        .set_behavior(PAYLOAD_URL, MockBehavior::Hang)
        .await;
    let sxl = sxl_with(mock, FetchStrategy::Concurrent);

    let stalled =
        tokio::time::timeout(Duration::from_millis(50), sxl.launch(Resource::Latest)).await;
    assert!(stalled.is_err());
    // The launchpad was requested even though the payload never answered
    let requests = controller.requests().await;
    assert!(requests.iter().any(|u| u == LAUNCHPAD_URL));
}

#[tokio::test]
async fn sequential_strategy_waits_for_payload_first() {
    let (mock, controller) = scripted(LATEST_URL).await;
    controller
        .set_behavior(PAYLOAD_URL, MockBehavior::Hang)
        .await;
    let sxl = sxl_with(mock, FetchStrategy::Sequential);

    let stalled =
        tokio::time::timeout(Duration::from_millis(50), sxl.launch(Resource::Latest)).await;
    assert!(stalled.is_err());
    assert_eq!(controller.requests().await, vec![LATEST_URL, PAYLOAD_URL]);
}
