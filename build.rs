//! Generates `build_info.rs` for the `--version` banner.
//!
//! Each value can be pinned from the environment so packaged builds are
//! reproducible; otherwise git and the system clock fill them in.

use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

const UNKNOWN: &str = "unknown";

fn git_commit() -> String {
    if let Ok(commit) = env::var("DRAGONFLAP_COMMIT") {
        return commit;
    }
    Command::new("git")
        .args(["rev-parse", "--short=7", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn build_date() -> String {
    env::var("DRAGONFLAP_BUILD_DATE")
        .unwrap_or_else(|_| chrono::Utc::now().format("%Y-%m-%d").to_string())
}

fn main() {
    let commit = git_commit();
    let date = build_date();
    let profile = env::var("PROFILE").unwrap_or_else(|_| UNKNOWN.to_string());

    let generated = format!(
        "pub const BUILD_COMMIT: &str = {:?};\n\
         pub const BUILD_DATE: &str = {:?};\n\
         pub const BUILD_PROFILE: &str = {:?};\n",
        commit, date, profile
    );

    let out_dir = env::var("OUT_DIR").expect("cargo sets OUT_DIR for build scripts");
    fs::write(Path::new(&out_dir).join("build_info.rs"), generated)
        .expect("failed to write build_info.rs");

    println!("cargo:rerun-if-changed=.git/HEAD");
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=DRAGONFLAP_COMMIT");
    println!("cargo:rerun-if-env-changed=DRAGONFLAP_BUILD_DATE");
}
