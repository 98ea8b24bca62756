//! Test assertion helpers.

use serde_json::Value;
use std::process::Output;

/// Assert that a command output was successful.
pub fn assert_success(output: &Output) {
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("Command failed:\n{}", stderr);
    }
}

/// Assert that a command output failed.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "Expected command to fail but it succeeded"
    );
}

/// Get stdout as String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Get stderr as String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

/// Assert stderr contains a string.
pub fn assert_stderr_contains(output: &Output, expected: &str) {
    let err = stderr(output);
    assert!(
        err.contains(expected),
        "stderr missing '{}', got: {}",
        expected,
        err
    );
}

/// Parse stdout as a response document and decode its inner field.
pub fn decoded(output: &Output, field: &str) -> Value {
    let out = stdout(output);
    let outer: Value = serde_json::from_str(out.trim_end())
        .unwrap_or_else(|e| panic!("stdout is not JSON ({}): {}", e, out));
    let text = outer[field]
        .as_str()
        .unwrap_or_else(|| panic!("field '{}' is not a string in: {}", field, out));
    serde_json::from_str(text).expect("inner field is not JSON")
}
