//! Raw request command implementation.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::Value;

use codeforge_http::Method;

use crate::app::App;
use crate::cli::GlobalArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct RequestArgs {
    /// HTTP method (GET, POST, PUT, DELETE)
    pub method: String,

    /// Path relative to the API base URL, e.g. /problems
    pub path: String,

    /// JSON request body
    #[arg(long)]
    pub body: Option<String>,
}

pub async fn run(args: RequestArgs, global: &GlobalArgs) -> Result<()> {
    let method = Method::from_bytes(args.method.to_ascii_uppercase().as_bytes())
        .with_context(|| format!("Invalid HTTP method '{}'", args.method))?;
    let body = args
        .body
        .as_deref()
        .map(serde_json::from_str::<Value>)
        .transpose()
        .context("Request body is not valid JSON")?;

    let app = App::build(global)?;

    let result = app
        .gateway
        .send::<Value, Value>(method, &args.path, body.as_ref())
        .await;

    match result {
        Ok(data) => output::json(&data),
        Err(err) => {
            if err.is_unauthorized() {
                output::note("Stored credential was rejected and has been removed.");
            }
            Err(err).context("Request failed")
        }
    }
}
