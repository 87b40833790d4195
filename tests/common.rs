#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::path::PathBuf;

pub fn nap() -> Command {
    cargo_bin_cmd!("napmap")
}

/// Create a unique config file path inside the system temp dir and remove any
/// existing file
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_napmap.conf", name));
    let conf_path = path.to_string_lossy().to_string();
    std::fs::remove_file(&conf_path).ok();
    conf_path
}

/// Run a scripted interactive session on built-in defaults and return the
/// assert handle.
pub fn session(script: &str) -> assert_cmd::assert::Assert {
    nap()
        .args(["--test", "session"])
        .write_stdin(script.to_string())
        .assert()
}
