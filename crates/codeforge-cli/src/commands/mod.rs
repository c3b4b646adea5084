//! Subcommand implementations.

mod login;
mod logout;
mod open;
mod register;
mod request;
mod whoami;

use anyhow::Result;
use clap::Subcommand;

use crate::cli::GlobalArgs;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and store the credential
    Login(login::LoginArgs),

    /// Create a new account (does not sign in)
    Register(register::RegisterArgs),

    /// Forget the stored credential
    Logout(logout::LogoutArgs),

    /// Display the signed-in user
    Whoami(whoami::WhoamiArgs),

    /// Evaluate the access guard for an application path
    Open(open::OpenArgs),

    /// Send a raw request through the gateway
    Request(request::RequestArgs),
}

pub async fn handle(cmd: Command, global: &GlobalArgs) -> Result<()> {
    match cmd {
        Command::Login(args) => login::run(args, global).await,
        Command::Register(args) => register::run(args, global).await,
        Command::Logout(args) => logout::run(args, global).await,
        Command::Whoami(args) => whoami::run(args, global).await,
        Command::Open(args) => open::run(args, global).await,
        Command::Request(args) => request::run(args, global).await,
    }
}
