//! CLI integration tests against a mock backend.
//!
//! Each test gets its own credential file, so an invocation sequence
//! behaves like successive page loads in one browser profile.

mod common;

use serde_json::json;
use tempfile::TempDir;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::{api_url, envelope, run_cli_with_env, run_cli_with_env_success};

async fn mount_backend(server: &MockServer, role: &str) {
    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "token": "tok123",
            "username": "alice",
            "role": role
        }))))
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .and(header("authorization", "Bearer tok123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(envelope(json!({
            "id": 1,
            "username": "alice",
            "role": role
        }))))
        .mount(server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_whoami_without_login_fails() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("token");

    let output = run_cli_with_env(&["whoami"], &store, &api_url(&server));

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Not logged in"));
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_login_persists_across_invocations() {
    let server = MockServer::start().await;
    mount_backend(&server, "admin").await;
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("token");
    let api = api_url(&server);

    let stdout = run_cli_with_env_success(
        &["login", "--username", "alice", "--password", "pw"],
        &store,
        &api,
    );
    assert!(stdout.contains("Logged in successfully"));
    assert!(stdout.contains("ROLE_ADMIN"));
    assert_eq!(std::fs::read_to_string(&store).unwrap(), "tok123");

    let stdout = run_cli_with_env_success(&["whoami"], &store, &api);
    assert!(stdout.contains("alice"));
    assert!(stdout.contains("ROLE_ADMIN"));
    assert!(stdout.contains("admin"));
    assert!(stdout.contains(&api));
}

#[test]
fn test_plain_http_remote_api_url_is_rejected() {
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("token");

    let output = run_cli_with_env(&["whoami"], &store, "http://codeforge.example/api");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("must use HTTPS"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_open_admin_page_as_user_redirects() {
    let server = MockServer::start().await;
    mount_backend(&server, "USER").await;
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("token");
    std::fs::write(&store, "tok123").unwrap();
    let api = api_url(&server);

    let stdout = run_cli_with_env_success(&["open", "/admin/problems"], &store, &api);
    assert!(stdout.contains("redirect"));
    assert!(stdout.contains("/dashboard"));

    let stdout = run_cli_with_env_success(&["open", "/problems/12"], &store, &api);
    assert!(stdout.contains("render"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_open_when_anonymous_redirects_to_login() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("token");

    let stdout =
        run_cli_with_env_success(&["open", "/dashboard"], &store, &api_url(&server));

    assert!(stdout.contains("redirect"));
    assert!(stdout.contains("/login"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_logout_removes_credential() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let store = dir.path().join("token");
    std::fs::write(&store, "tok123").unwrap();

    let stdout = run_cli_with_env_success(&["logout"], &store, &api_url(&server));

    assert!(stdout.contains("Logged out"));
    assert!(!store.exists());
    assert!(server.received_requests().await.unwrap().is_empty());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_rejected_request_evicts_credential() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/submissions"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "success": false,
            "message": "Unauthorized: token expired"
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = dir.path().join("token");
    std::fs::write(&store, "tok123").unwrap();

    let output = run_cli_with_env(&["request", "get", "/submissions"], &store, &api_url(&server));

    assert!(!output.status.success());
    assert!(!store.exists());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_register_reports_validation_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "success": false,
            "message": "Email already registered"
        })))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let store = dir.path().join("token");

    let output = run_cli_with_env(
        &[
            "register",
            "--username",
            "alice",
            "--email",
            "alice@example.com",
            "--password",
            "pw",
        ],
        &store,
        &api_url(&server),
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Email already registered"));
    assert!(!store.exists());
}
