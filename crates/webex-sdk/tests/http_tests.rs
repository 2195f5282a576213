/*
[INPUT]:  Mock HTTP responses
[OUTPUT]: Test results for the session (auth headers, retries, errors)
[POS]:    Integration tests - HTTP session behavior
[UPDATE]: When request/response handling changes
*/

mod common;

use std::time::Duration;

use common::{mock_token, person_json, setup_mock_server, test_client, test_client_with_retry};
use futures_util::future::try_join;
use serde_json::json;
use tokio_test::assert_ok;
use webex_sdk::{ClientConfig, RetryConfig, WebexClient, WebexError};
use wiremock::matchers::{header, header_exists, method, path};
use wiremock::{Mock, ResponseTemplate};

#[test]
fn test_client_creation() {
    let client = assert_ok!(WebexClient::new(mock_token()));
    assert_eq!(client.base_url().as_str(), "https://webexapis.com/v1/");
}

#[test]
fn test_client_with_config_normalizes_base_url() {
    let config = ClientConfig {
        base_url: "https://api.example.com/v1".to_string(),
        ..ClientConfig::default()
    };
    let client = assert_ok!(WebexClient::with_config(config, mock_token()));
    assert_eq!(client.base_url().as_str(), "https://api.example.com/v1/");
}

#[test]
fn test_invalid_base_url_rejected() {
    let config = ClientConfig {
        base_url: "not a url".to_string(),
        ..ClientConfig::default()
    };
    let err = WebexClient::with_config(config, mock_token()).unwrap_err();
    assert!(matches!(err, WebexError::UrlParse(_)));
}

#[test]
fn test_error_classification() {
    let rate_limited = WebexError::RateLimit { retry_after: 3 };
    assert!(rate_limited.is_retryable());
    assert_eq!(rate_limited.retry_delay(), Some(3));
    assert_eq!(rate_limited.status(), Some(429));

    let unauthorized = WebexError::Api {
        status: 401,
        message: "The request requires a valid access token".to_string(),
        tracking_id: None,
        errors: Vec::new(),
    };
    assert!(unauthorized.is_auth_error());
    assert!(!unauthorized.is_retryable());
}

#[tokio::test]
async fn test_auth_and_tracking_headers() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/people/me"))
        .and(header("authorization", format!("Bearer {}", mock_token()).as_str()))
        .and(header_exists("trackingid"))
        .respond_with(ResponseTemplate::new(200).set_body_json(person_json("me")))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server);
    assert_ok!(client.people().me().await);
    assert_ok!(client.people().me().await);

    let requests = server.received_requests().await.expect("recording enabled");
    let ids: Vec<String> = requests
        .iter()
        .filter_map(|request| request.headers.get("trackingid"))
        .filter_map(|value| value.to_str().ok())
        .map(str::to_string)
        .collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.iter().all(|id| id.starts_with("WEBEX_SDK_")));
    assert_ne!(ids[0], ids[1]);
}

#[tokio::test]
async fn test_429_is_retried_after_retry_after() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/people/me"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "0"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/people/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(person_json("me")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let me = assert_ok!(client.people().me().await);
    assert_eq!(me.id.as_deref(), Some("me"));
}

#[tokio::test]
async fn test_429_retries_exhausted() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/people/me"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "1"))
        .expect(3)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.people().me().await.unwrap_err();
    assert!(matches!(err, WebexError::RateLimit { retry_after: 1 }));
}

#[tokio::test]
async fn test_429_wait_capped_by_max_wait() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/people/me"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/people/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(person_json("me")))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client_with_retry(
        &server,
        RetryConfig {
            retry_429: true,
            max_retries: 1,
            max_wait: Duration::from_millis(50),
        },
    );
    let me = tokio::time::timeout(Duration::from_secs(2), client.people().me())
        .await
        .expect("back-off should be capped by max_wait");
    assert_eq!(assert_ok!(me).id.as_deref(), Some("me"));
}

#[tokio::test]
async fn test_429_not_retried_when_disabled() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/people/me"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "7"))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client_with_retry(
        &server,
        RetryConfig {
            retry_429: false,
            ..RetryConfig::default()
        },
    );
    let err = client.people().me().await.unwrap_err();
    assert_eq!(err.retry_delay(), Some(7));
}

#[tokio::test]
async fn test_server_error_passthrough() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/rooms/r1"))
        .respond_with(
            ResponseTemplate::new(502)
                .insert_header("trackingid", "ROUTER_header")
                .set_body_string("upstream unavailable"),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client.rooms().details("r1").await.unwrap_err();
    assert!(err.is_retryable());
    match err {
        WebexError::Api {
            status,
            message,
            tracking_id,
            ..
        } => {
            assert_eq!(status, 502);
            assert_eq!(message, "upstream unavailable");
            assert_eq!(tracking_id.as_deref(), Some("ROUTER_header"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_error_descriptions_collected() {
    let server = setup_mock_server().await;
    Mock::given(method("POST"))
        .and(path("/rooms"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "Invalid request",
            "errors": [
                {"description": "title is required"},
                {"description": "teamId is malformed"}
            ],
            "trackingId": "ROUTER_body"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .rooms()
        .create(&webex_sdk::RoomSettings::new(""))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(400));
    if let WebexError::Api {
        errors,
        tracking_id,
        ..
    } = err
    {
        assert_eq!(errors, vec!["title is required", "teamId is malformed"]);
        assert_eq!(tracking_id.as_deref(), Some("ROUTER_body"));
    }
}

#[tokio::test]
async fn test_concurrent_fan_out() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .and(path("/people/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(person_json("me")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/rooms/r1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "r1",
            "title": "Standup",
            "type": "group"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let people = client.people();
    let rooms = client.rooms();
    let (me, room) = assert_ok!(try_join(people.me(), rooms.details("r1")).await);
    assert_eq!(me.id.as_deref(), Some("me"));
    assert_eq!(room.title.as_deref(), Some("Standup"));
}

#[tokio::test]
async fn test_empty_token_fails_before_sending() {
    let server = setup_mock_server().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let config = ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    };
    let client = assert_ok!(WebexClient::with_config(config, ""));
    let err = client.people().me().await.unwrap_err();
    assert!(err.is_auth_error());
}
