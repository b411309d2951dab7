use std::sync::Arc;

use sxl::{DEFAULT_API_BASE, FetchStrategy, Resource, Sxl, SxlConfig, SxlError};
use sxl_mock::MockConnector;

#[test]
fn build_requires_a_connector() {
    let err = Sxl::builder().build().err().unwrap();
    assert!(matches!(err, SxlError::InvalidArg(_)));
}

#[test]
fn build_rejects_unusable_api_base() {
    let err = Sxl::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .api_base("not a url")
        .build()
        .err()
        .unwrap();
    assert!(matches!(err, SxlError::Config(_)));
}

#[test]
fn config_is_carried_into_orchestrator() {
    let cfg = SxlConfig {
        api_base: "http://127.0.0.1:9/v4/".to_string(),
        fetch_strategy: FetchStrategy::Concurrent,
        ..SxlConfig::default()
    };
    let sxl = Sxl::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .config(cfg.clone())
        .build()
        .unwrap();

    assert_eq!(sxl.config(), &cfg);
    assert_eq!(
        sxl.endpoints().launch(Resource::Next),
        "http://127.0.0.1:9/v4/launches/next"
    );
}

#[test]
fn default_base_targets_public_api() {
    let sxl = Sxl::builder()
        .with_connector(Arc::new(MockConnector::new()))
        .build()
        .unwrap();
    assert_eq!(sxl.config().api_base, DEFAULT_API_BASE);
    assert_eq!(
        sxl.endpoints().payload("abc"),
        "https://api.spacexdata.com/v4/payloads/abc"
    );
}
