//! Whoami command implementation.

use anyhow::{Result, bail};
use clap::Args;

use codeforge_session::{NavVariant, SessionState};

use crate::app::App;
use crate::cli::GlobalArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// Print the session state as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: WhoamiArgs, global: &GlobalArgs) -> Result<()> {
    let app = App::build(global)?;
    let state = app.session.initialize().await;

    if args.json {
        return output::json(&state);
    }

    let SessionState::Authenticated(profile) = &state else {
        bail!("Not logged in. Run 'codeforge login' first.");
    };

    output::profile(profile);
    if let Some(nav) = NavVariant::for_session(&state) {
        output::field("Navbar", format!("{nav:?}").to_lowercase());
    }
    output::field("Backend", app.gateway.base_url());
    output::field("Credential", app.store.path().display());

    Ok(())
}
