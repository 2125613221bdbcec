//! # End-to-End Negotiation Tests for the CLI Wiring
//!
//! These tests drive the library exactly the way the binary does: a
//! [`StaticGeolocator`] standing in for the host capability, a recording
//! notifier in place of the console sink, and a mock backend serving the
//! location endpoints.

use std::sync::Arc;

use serde_json::json;
use tide_api_lib::api::ApiClient;
use tide_api_lib::config::ApiConfig;
use tide_api_lib::geo::StaticGeolocator;
use tide_api_lib::location::PermissionState;
use tide_api_lib::notify::RecordingNotifier;
use tide_api_lib::UserIdentity;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn client_for(server: &MockServer) -> (ApiClient, Arc<RecordingNotifier>) {
    let notifier = Arc::new(RecordingNotifier::new());
    let config = ApiConfig {
        base_url: format!("{}/api/", server.uri()),
        timeout_secs: 5,
    };
    let client = ApiClient::new(&config, notifier.clone()).unwrap();
    (client, notifier)
}

/// Happy path through the CLI wiring: pending permission, token issued,
/// static capability token accepted, coordinates reported back.
#[tokio::test]
async fn static_geolocator_completes_the_negotiation() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/zalo/location/permission/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "pending"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/zalo/location/token/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc123"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/zalo/location/"))
        .and(query_param("token", "cap-tok"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"latitude": 20.95, "longitude": 107.04})),
        )
        .mount(&server)
        .await;

    let (client, notifier) = client_for(&server).await;
    let identity = UserIdentity::new("u-1", "tok");
    let geolocator = StaticGeolocator::new(Some("cap-tok".to_string()));

    client.request_user_location(&identity, &geolocator).await;

    assert_eq!(
        notifier.messages(),
        vec![
            "Yêu cầu cấp quyền vị trí đã được gửi. Vui lòng xác nhận!",
            "Vị trí của bạn đã được lưu!",
            "Vị trí: (20.95, 107.04)",
        ]
    );
}

/// An unconfigured geolocator behaves like a permission denial and routes
/// through the backend error check.
#[tokio::test]
async fn missing_geo_token_takes_the_denial_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/zalo/location/permission/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "pending"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/zalo/location/token/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "abc123"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/zalo/location/error/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(
            json!({"status": "denied", "message": "Quyền vị trí đã bị từ chối."}),
        ))
        .expect(1)
        .mount(&server)
        .await;

    let (client, notifier) = client_for(&server).await;
    let identity = UserIdentity::new("u-1", "tok");
    let geolocator = StaticGeolocator::new(None);

    client.request_user_location(&identity, &geolocator).await;

    assert_eq!(
        notifier.messages(),
        vec![
            "Yêu cầu cấp quyền vị trí đã được gửi. Vui lòng xác nhận!",
            "Bạn đã từ chối cấp quyền vị trí. Vui lòng bật quyền trong cài đặt Zalo.",
            "Quyền vị trí đã bị từ chối.",
        ]
    );
}

/// The standalone status check parses the backend payload without issuing
/// notifications of its own.
#[tokio::test]
async fn standalone_error_check_is_silent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/zalo/location/error/"))
        .and(query_param("access_token", "tok"))
        .and(query_param("user_id", "u-1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"status": "denied", "message": "Đã bị từ chối."})),
        )
        .mount(&server)
        .await;

    let (client, notifier) = client_for(&server).await;
    let identity = UserIdentity::new("u-1", "tok");

    let status = client.check_location_error(&identity).await.unwrap();
    assert_eq!(status.status, PermissionState::Denied);
    assert_eq!(status.message, "Đã bị từ chối.");
    assert!(notifier.messages().is_empty());
}
