//! Terminal rendering for sessions and guard decisions.
//!
//! Results go to stdout, progress and failures to stderr, so piping
//! `whoami --json` or `request` output stays clean.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use codeforge_core::UserProfile;
use codeforge_session::GuardDecision;

pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

pub fn note(msg: &str) {
    eprintln!("{}", msg.dimmed());
}

pub fn field(label: &str, value: impl std::fmt::Display) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print the identity fields of a resolved user.
pub fn profile(profile: &UserProfile) {
    field("ID", profile.id);
    field("Username", &profile.username);
    let role = if profile.role.is_admin() {
        profile.role.as_str().magenta()
    } else {
        profile.role.as_str().normal()
    };
    field("Role", role);
}

/// Print what the browser would do when navigating to `path`.
pub fn decision(path: &str, decision: &GuardDecision) {
    match decision {
        GuardDecision::Render => println!("{} {}", "render".green(), path),
        GuardDecision::Redirect(to) => println!("{} {} -> {}", "redirect".yellow(), path, to),
        GuardDecision::Placeholder => println!("{}", "Loading...".dimmed()),
    }
}

/// Print any serializable value as indented JSON.
pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
