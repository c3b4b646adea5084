use std::path::Path;
use std::process::{Command, Output};

use wiremock::MockServer;

/// API base URL for a mock server.
pub fn api_url(server: &MockServer) -> String {
    format!("http://127.0.0.1:{}/api", server.address().port())
}

/// Run the CLI against `api` with an isolated credential file.
pub fn run_cli_with_env(args: &[&str], store: &Path, api: &str) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_codeforge"));
    cmd.args(args);
    cmd.env("CODEFORGE_STORE", store);
    cmd.env("CODEFORGE_API_URL", api);
    cmd.env_remove("RUST_LOG");
    cmd.output().expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub fn run_cli_with_env_success(args: &[&str], store: &Path, api: &str) -> String {
    let output = run_cli_with_env(args, store, api);
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Wrap a payload in the backend's response envelope.
pub fn envelope(data: serde_json::Value) -> serde_json::Value {
    serde_json::json!({ "success": true, "message": "ok", "data": data })
}
