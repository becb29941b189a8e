use std::env;
use std::process::Command;

const FALLBACK_VERSION: &str = "dev";

fn main() {
    println!("cargo:rerun-if-env-changed=GIT_VERSION");
    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=.git/index");

    let version = version_from_env()
        .or_else(version_from_git)
        .unwrap_or_else(|| FALLBACK_VERSION.to_string());
    println!("cargo:rustc-env=GIT_VERSION={version}");
}

/// Container and CI builds have no `.git`, so they pass the version in.
fn version_from_env() -> Option<String> {
    env::var("GIT_VERSION")
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != FALLBACK_VERSION)
}

fn version_from_git() -> Option<String> {
    let output = Command::new("git")
        .args(["describe", "--tags", "--always", "--dirty"])
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let described = String::from_utf8_lossy(&output.stdout).trim().to_string();
    (!described.is_empty()).then_some(described)
}
