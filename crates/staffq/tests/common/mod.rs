//! Common test utilities shared across integration tests.

use std::path::Path;
use std::process::{Command, Output};

/// Run the staffq binary with colors disabled and logging silenced.
pub fn run_staffq(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_staffq"))
        .args(args)
        .env("NO_COLOR", "1")
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute staffq binary")
}

/// Run staffq with `--config <path>` prepended.
pub fn run_staffq_with_config(config: &Path, args: &[&str]) -> Output {
    let config = config.to_str().expect("temp path is not UTF-8");
    let mut full = vec!["--config", config];
    full.extend_from_slice(args);
    run_staffq(&full)
}

/// Stdout as a string, asserting the command succeeded.
pub fn stdout_of(output: &Output) -> String {
    assert!(
        output.status.success(),
        "staffq failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Parse `--format jsonl` output into one value per line.
pub fn jsonl_rows(stdout: &str) -> Vec<serde_json::Value> {
    stdout
        .lines()
        .map(|line| serde_json::from_str(line).expect("invalid JSON line"))
        .collect()
}
