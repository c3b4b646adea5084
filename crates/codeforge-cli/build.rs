//! Stamps `codeforge --version` with the commit the binary was built from.
//!
//! Produces `0.1.0 (a1b2c3d)`, or `0.1.0 (a1b2c3d-dirty)` for a modified
//! tree. Outside a git checkout only the package version is used.

use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=../../.git/HEAD");
    println!("cargo:rerun-if-changed=../../.git/index");

    let package = env!("CARGO_PKG_VERSION");
    let version = match commit() {
        Some(commit) => format!("{package} ({commit})"),
        None => package.to_string(),
    };

    println!("cargo:rustc-env=CODEFORGE_VERSION={version}");
}

fn commit() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--always", "--dirty", "--exclude", "*"])
        .output()
        .ok()?;

    let commit = String::from_utf8(output.stdout).ok()?;
    let commit = commit.trim();
    (output.status.success() && !commit.is_empty()).then(|| commit.to_string())
}
