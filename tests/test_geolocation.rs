//! Integration tests for the IpGeolocationProvider using mockito for HTTP mocking.

use amber_safe::error::GeolocationError;
use amber_safe::geolocation::{Coordinates, GeolocationProvider, IpGeolocationProvider, PositionOptions};
use mockito::Server;
use std::net::TcpListener;
use std::time::Duration;

fn provider_for(server: &Server) -> IpGeolocationProvider {
    IpGeolocationProvider::new(format!("{}/json", server.url()), Duration::from_secs(5))
}

#[tokio::test]
async fn test_lookup_success() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/json")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status":"success","lat":1.0,"lon":2.0}"#)
        .create_async()
        .await;

    let result = provider_for(&server)
        .current_position(PositionOptions::default())
        .await;

    mock.assert_async().await;
    assert_eq!(result, Ok(Coordinates::new(1.0, 2.0).unwrap()));
}

#[tokio::test]
async fn test_recent_fix_is_reused() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/json")
        .with_status(200)
        .with_body(r#"{"lat":51.5,"lon":-0.12}"#)
        .expect(1)
        .create_async()
        .await;

    let provider = provider_for(&server);
    let first = provider.current_position(PositionOptions::default()).await;
    let second = provider.current_position(PositionOptions::default()).await;

    mock.assert_async().await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_zero_maximum_age_always_looks_up() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/json")
        .with_status(200)
        .with_body(r#"{"lat":51.5,"lon":-0.12}"#)
        .expect(2)
        .create_async()
        .await;

    let options = PositionOptions {
        maximum_age: Duration::ZERO,
        ..PositionOptions::default()
    };
    let provider = provider_for(&server);
    provider.current_position(options).await.unwrap();
    provider.current_position(options).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_lookup_reports_service_failure() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/json")
        .with_status(200)
        .with_body(r#"{"status":"fail","message":"reserved range"}"#)
        .create_async()
        .await;

    let result = provider_for(&server)
        .current_position(PositionOptions::default())
        .await;

    mock.assert_async().await;
    assert_eq!(
        result,
        Err(GeolocationError::PositionUnavailable("reserved range".to_string()))
    );
}

#[tokio::test]
async fn test_lookup_refused() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/json")
        .with_status(403)
        .create_async()
        .await;

    let result = provider_for(&server)
        .current_position(PositionOptions::default())
        .await;

    mock.assert_async().await;
    assert!(matches!(result, Err(GeolocationError::PermissionDenied(_))));
}

#[tokio::test]
async fn test_failed_lookup_is_not_cached() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/json")
        .with_status(500)
        .expect(2)
        .create_async()
        .await;

    let provider = provider_for(&server);
    assert!(provider.current_position(PositionOptions::default()).await.is_err());
    assert!(provider.current_position(PositionOptions::default()).await.is_err());

    mock.assert_async().await;
}

#[tokio::test]
async fn test_lookup_times_out() {
    // Accepts connections into the backlog but never answers
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/json", listener.local_addr().unwrap());

    let provider = IpGeolocationProvider::new(endpoint, Duration::from_millis(500));
    let options = PositionOptions {
        timeout: Duration::from_millis(50),
        maximum_age: Duration::ZERO,
    };

    let result = provider.current_position(options).await;
    assert_eq!(result, Err(GeolocationError::Timeout));

    drop(listener);
}
