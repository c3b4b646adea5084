//! Logout command implementation.

use anyhow::Result;
use clap::Args;

use crate::app::App;
use crate::cli::GlobalArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs, global: &GlobalArgs) -> Result<()> {
    let app = App::build(global)?;

    app.session.logout();

    output::success("Logged out");
    Ok(())
}
