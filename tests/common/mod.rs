//! Shared integration-test harness for running the compiled `structmd`
//! binary against scratch documents.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Runs `structmd` with the given arguments.
pub fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_structmd"))
        .args(args)
        .output()
        .expect("failed to spawn structmd")
}

/// Writes `content` to `name` under `dir` and returns the full path.
pub fn write_input(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).expect("failed to write test input");
    path
}

/// Reads the produced Markdown file at `path`.
pub fn read_output(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("missing output {}: {e}", path.display()))
}

/// Asserts a successful exit, printing stderr on failure.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected success, stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}
