use std::process::Output;

use serde_json::{Value, json};
use tokio::process::Command;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn webex() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_webex"));
    // Keep the developer's own config and credentials out of the run
    command
        .env("XDG_CONFIG_HOME", std::env::temp_dir().join("webex-cli-tests-no-config"))
        .env_remove("WEBEX_ACCESS_TOKEN")
        .env_remove("WEBEX_BASE_URL")
        .env("RUST_LOG", "error");
    command
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "Process exited with non-zero status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    );
}

#[tokio::test]
async fn me_prints_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people/me"))
        .and(header("authorization", "Bearer cli-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "me",
            "emails": ["me@example.com"],
            "displayName": "Me"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = webex()
        .args(["--base-url", &server.uri(), "--token", "cli-token", "me"])
        .output()
        .await
        .expect("Failed to start webex binary");

    assert_success(&output);
    let value: Value = serde_json::from_slice(&output.stdout).expect("json stdout");
    assert_eq!(value["id"], "me");
    assert_eq!(value["displayName"], "Me");
}

#[tokio::test]
async fn environment_token_and_yaml_output() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rooms"))
        .and(header("authorization", "Bearer env-token"))
        .and(query_param("max", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"id": "r1", "title": "Standup", "type": "group"}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = webex()
        .env("WEBEX_ACCESS_TOKEN", "env-token")
        .env("WEBEX_BASE_URL", server.uri())
        .args(["rooms", "list", "--output", "yaml", "--max", "1"])
        .output()
        .await
        .expect("Failed to start webex binary");

    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("id: r1"), "unexpected output: {stdout}");
    assert!(stdout.contains("title: Standup"));
}

#[tokio::test]
async fn missing_token_fails() {
    let output = webex()
        .args(["me"])
        .output()
        .await
        .expect("Failed to start webex binary");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no access token"), "unexpected stderr: {stderr}");
}

#[tokio::test]
async fn api_error_exits_non_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/people/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "message": "The request requires a valid access token set in the Authorization request header.",
            "trackingId": "ROUTER_cli"
        })))
        .mount(&server)
        .await;

    let output = webex()
        .args(["--base-url", &server.uri(), "--token", "expired", "me"])
        .output()
        .await
        .expect("Failed to start webex binary");

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}
