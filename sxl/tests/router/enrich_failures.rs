use sxl::{FetchError, FetchStrategy, Resource, ResourceKind, SxlError};
use sxl_mock::{DynamicMockConnector, MockBehavior};

use crate::helpers::{LATEST_URL, LAUNCHPAD_URL, PAYLOAD_URL, scripted, sxl_with};

#[tokio::test]
async fn launch_failure_issues_no_dependent_requests() {
    let (mock, controller) = scripted(LATEST_URL).await;
    controller
        .fail_with_status(LATEST_URL, 500, "Internal Server Error")
        .await;
    let sxl = sxl_with(mock, FetchStrategy::Sequential);

    let err = sxl.launch(Resource::Latest).await.unwrap_err();
    assert_eq!(
        err,
        SxlError::fetch(
            ResourceKind::Launch,
            FetchError::status(500, "Internal Server Error", LATEST_URL)
        )
    );
    assert_eq!(controller.requests().await, vec![LATEST_URL]);
}

#[tokio::test]
async fn payload_failure_is_tagged_and_stops_sequential_run() {
    let (mock, controller) = scripted(LATEST_URL).await;
    controller
        .fail_with_status(PAYLOAD_URL, 500, "Internal Server Error")
        .await;
    let sxl = sxl_with(mock, FetchStrategy::Sequential);

    let err = sxl.launch(Resource::Latest).await.unwrap_err();
    assert_eq!(err.kind(), Some(ResourceKind::Payload));
    assert_eq!(controller.requests().await, vec![LATEST_URL, PAYLOAD_URL]);
}

#[tokio::test]
async fn launchpad_failure_is_tagged() {
    let (mock, controller) = scripted(LATEST_URL).await;
    controller
        .set_behavior(
            LAUNCHPAD_URL,
            MockBehavior::Fail(FetchError::transport(LAUNCHPAD_URL, "connection reset")),
        )
        .await;
    let sxl = sxl_with(mock, FetchStrategy::Sequential);

    let err = sxl.launch(Resource::Latest).await.unwrap_err();
    match err {
        SxlError::Fetch {
            kind: ResourceKind::Launchpad,
            source: FetchError::Transport { msg, .. },
        } => assert_eq!(msg, "connection reset"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[tokio::test]
async fn unscripted_launch_surfaces_not_found() {
    let (mock, _controller) = DynamicMockConnector::new_with_controller("empty");
    let sxl = sxl_with(mock, FetchStrategy::Sequential);

    let err = sxl.launch(Resource::Next).await.unwrap_err();
    match err {
        SxlError::Fetch {
            kind: ResourceKind::Launch,
            source: FetchError::Status { status, reason, .. },
        } => {
            assert_eq!(status, 404);
            assert_eq!(reason, "Not Found");
        }
        other => panic!("unexpected: {other:?}"),
    }
}
