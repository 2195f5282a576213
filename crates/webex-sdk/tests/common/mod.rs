/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for webex-sdk tests

use std::time::Duration;

use webex_sdk::{ClientConfig, RetryConfig, WebexClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Bearer token used by test clients
pub fn mock_token() -> String {
    "MzY5ZjFhNzAtYTU1ZC00YjQ0LTk5NTQtNDA3ZTA5ZDg2MzU1_PF84_test".to_string()
}

/// Client against the mock server with short 429 back-off
pub fn test_client(server: &MockServer) -> WebexClient {
    test_client_with_retry(
        server,
        RetryConfig {
            retry_429: true,
            max_retries: 2,
            max_wait: Duration::from_millis(20),
        },
    )
}

#[allow(dead_code)]
pub fn test_client_with_retry(server: &MockServer, retry: RetryConfig) -> WebexClient {
    let config = ClientConfig {
        base_url: server.uri(),
        retry,
        ..ClientConfig::default()
    };
    WebexClient::with_config(config, mock_token()).expect("client init")
}

/// Minimal person body
#[allow(dead_code)]
pub fn person_json(id: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "emails": [format!("{id}@example.com")],
        "displayName": id,
        "type": "person"
    })
}
