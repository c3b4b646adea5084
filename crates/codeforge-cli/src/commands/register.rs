//! Register command implementation.

use anyhow::{Context, Result};
use clap::Args;

use codeforge_core::Registration;

use crate::app::App;
use crate::cli::GlobalArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct RegisterArgs {
    /// Desired username
    #[arg(long)]
    pub username: String,

    /// Contact email
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: RegisterArgs, global: &GlobalArgs) -> Result<()> {
    let registration = Registration::new(args.username, args.email, args.password)?;
    let app = App::build(global)?;

    output::note("Registering...");

    app.session
        .register(&registration)
        .await
        .context("Registration failed")?;

    output::success("Account created. Run 'codeforge login' to sign in.");

    Ok(())
}
