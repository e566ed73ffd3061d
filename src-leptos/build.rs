//! Bakes the build version and the storefront API base URL into the bundle.

use std::process::Command;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8080";

fn git_version() -> Option<String> {
    let output = Command::new("git").args(["describe", "--tags", "--always", "--dirty"]).output().ok()?;
    let text = String::from_utf8(output.stdout).ok()?;
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_owned())
}

fn main() {
    let version = git_version().unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_owned());
    let api_base = std::env::var("GROCER_API_BASE_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_owned());

    println!("cargo:rustc-env=GIT_VERSION={version}");
    println!("cargo:rustc-env=GROCER_API_BASE={api_base}");
    println!("cargo:rerun-if-env-changed=GROCER_API_BASE_URL");
    println!("cargo:rerun-if-changed=.git/HEAD");
}
