#![allow(dead_code)]

use assert_cmd::Command;

/// Builds a `ums` invocation with colors disabled
pub fn ums_cmd() -> Command {
    let mut cmd = Command::cargo_bin("ums").unwrap();
    cmd.arg("--no-color");
    cmd
}

/// Joins menu answers into newline-terminated stdin text
pub fn stdin_script(lines: &[&str]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

/// Common assertion helper for error messages
pub fn assert_error_contains(error_string: &str, expected_messages: &[&str]) {
    for msg in expected_messages {
        assert!(
            error_string.contains(msg),
            "Expected error to contain '{msg}', but got: {error_string}"
        );
    }
}
