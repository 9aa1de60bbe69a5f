use client::ApiClient;
use pretty_assertions::assert_eq;
use shared_types::AppErrorKind;

use crate::common::{self, StubBackend};

#[tokio::test]
async fn test_health_reports_status() {
    let backend = StubBackend::start().await;
    let health = backend.client().health().await.unwrap();
    assert_eq!(health.status, "healthy");
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let api = ApiClient::new(common::unused_base_url().await);

    let err = api.current_user("token-1").await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);

    let err = api.list_users("token-1", 1, 10).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
}

#[tokio::test]
async fn test_missing_route_maps_to_not_found() {
    let backend = StubBackend::start().await;
    let api = ApiClient::new(format!("{}/v2", backend.base_url));

    let err = api.health().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::NotFound);
}
