//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser};

use codeforge_core::ApiUrl;

use crate::commands::Command;

/// Session and access control for the CodeForge practice platform.
#[derive(Parser, Debug)]
#[command(name = "codeforge")]
#[command(author, version = env!("CODEFORGE_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

/// Connection and storage settings shared by every command.
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Backend API base URL
    #[arg(long, env = "CODEFORGE_API_URL", default_value = ApiUrl::DEFAULT, global = true)]
    pub api_url: ApiUrl,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 10, global = true)]
    pub timeout_secs: u64,

    /// Credential file (defaults to the platform data directory)
    #[arg(long, env = "CODEFORGE_STORE", global = true)]
    pub store: Option<PathBuf>,
}
