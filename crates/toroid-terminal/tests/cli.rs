//! Tests for the `toroid` binary's startup failures.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_toroid(stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_toroid"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn out_of_range_seed_exits_with_status_one() {
    let output = run_toroid("0 1 2");
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.starts_with("toroid: invalid seed:"), "{stderr}");
    assert_eq!(stderr.lines().count(), 1, "{stderr}");
    // Nothing drawn and no terminal setup.
    assert!(output.stdout.is_empty());
}

#[test]
fn truncated_seed_exits_with_status_one() {
    let output = run_toroid("0 1 1 0\n1 1\n");
    let stderr = String::from_utf8(output.stderr).unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.starts_with("toroid: invalid seed:"), "{stderr}");
    assert!(stderr.contains("expected 2000 cells, found 6"), "{stderr}");
    assert!(output.stdout.is_empty());
}
