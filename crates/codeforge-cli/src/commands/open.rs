//! Open command implementation.

use anyhow::{Result, bail};
use clap::Args;

use codeforge_session::RouteTable;

use crate::app::App;
use crate::cli::GlobalArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct OpenArgs {
    /// Application path, e.g. /admin/problems
    pub path: String,
}

pub async fn run(args: OpenArgs, global: &GlobalArgs) -> Result<()> {
    let routes = RouteTable::codeforge();
    if routes.resolve(&args.path).is_none() {
        bail!("No page at {}", args.path);
    }

    let app = App::build(global)?;
    let state = app.session.initialize().await;

    let Some(decision) = routes.decide(&args.path, &state) else {
        bail!("No page at {}", args.path);
    };
    output::decision(&args.path, &decision);

    Ok(())
}
