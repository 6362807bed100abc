//! Embeds the short commit hash and build date for `--version`.
//!
//! `BUILD_COMMIT` / `BUILD_DATE` in the environment win over git and the
//! clock, so packaged builds are reproducible.

use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::Command;

const UNKNOWN: &str = "unknown";

/// Seven-character hash of HEAD, or `unknown` outside a git checkout.
fn commit() -> String {
    if let Ok(commit) = env::var("BUILD_COMMIT") {
        return commit;
    }
    let output = match Command::new("git").args(["rev-parse", "--short=7", "HEAD"]).output() {
        Ok(output) if output.status.success() => output,
        _ => return UNKNOWN.to_string(),
    };
    match String::from_utf8(output.stdout) {
        Ok(hash) if hash.trim().len() == 7 => hash.trim().to_string(),
        _ => UNKNOWN.to_string(),
    }
}

fn date() -> String {
    env::var("BUILD_DATE").unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string())
}

fn main() {
    let Some(out_dir) = env::var_os("OUT_DIR") else {
        panic!("OUT_DIR is not set; run through cargo");
    };
    let generated = format!(
        "pub const BUILD_COMMIT: &str = {:?};\npub const BUILD_DATE: &str = {:?};\n",
        commit(),
        date()
    );
    let dest = PathBuf::from(out_dir).join("build_info.rs");
    if let Err(e) = fs::write(&dest, generated) {
        panic!("cannot write {}: {e}", dest.display());
    }

    for watched in [".git/HEAD", ".git/refs/heads"] {
        println!("cargo:rerun-if-changed={watched}");
    }
    println!("cargo:rerun-if-env-changed=BUILD_COMMIT");
    println!("cargo:rerun-if-env-changed=BUILD_DATE");
}
