//! Shared helpers for integration tests.
//!
//! - `log_capture`: collects tracing events emitted by library calls
//! - [`dashfmt_cmd`]: a binary invocation isolated from the caller's environment

#![allow(dead_code)]

pub mod log_capture;

use std::path::Path;

use assert_cmd::Command;

/// Environment variables the binary reads.
const DASHFMT_ENV: &[&str] = &[
    "DASHFMT_LOCALE",
    "DASHFMT_FORMAT",
    "DASHFMT_NO_COLOR",
    "NO_COLOR",
    "DASHFMT_PRETTY",
    "DASHFMT_VERBOSE",
    "DASHFMT_LOG",
    "DASHFMT_LOG_FORMAT",
    "DASHFMT_LOG_FILE",
    "RUST_LOG",
];

/// `dashfmt` with a config path that does not exist and no `DASHFMT_*` env.
#[allow(deprecated)]
pub fn dashfmt_cmd(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("dashfmt").expect("binary builds");
    for key in DASHFMT_ENV {
        cmd.env_remove(key);
    }
    cmd.env("DASHFMT_CONFIG", config_dir.join("config.toml"));
    cmd
}

/// Parse stdout as JSON.
pub fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}
