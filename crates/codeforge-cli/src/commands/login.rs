//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::app::App;
use crate::cli::GlobalArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account username
    #[arg(long)]
    pub username: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: LoginArgs, global: &GlobalArgs) -> Result<()> {
    let app = App::build(global)?;

    output::note("Logging in...");

    let profile = app
        .session
        .login(&args.username, &args.password)
        .await
        .context("Failed to login")?;

    output::success("Logged in successfully");
    println!();
    output::profile(&profile);

    Ok(())
}
