//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("taskenv") || stdout(&output).contains("Usage"));
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_not_json_input() {
    let t = Test::new();

    let output = t.env("this is not json");
    assert_failure(&output);
    assert!(output.stdout.is_empty());
    assert_stderr_contains(&output, "input is not valid JSON");
}

#[test]
fn test_invalid_utf8_input_is_malformed() {
    let t = Test::new();

    let output = t
        .cmd()
        .arg("env")
        .write_stdin(vec![b'{', 0xff, 0xfe, b'}'])
        .output()
        .unwrap();
    assert_failure(&output);
    assert!(output.stdout.is_empty());
    assert_stderr_contains(&output, "malformed input: input is not valid UTF-8");
}

#[test]
fn test_top_level_array_rejected() {
    let t = Test::new();

    let output = t.secrets("[]");
    assert_failure(&output);
    assert_stderr_contains(&output, "expected a JSON object");
}

#[test]
fn test_field_not_double_encoded() {
    let t = Test::new();

    let output = t.env(r#"{"env": {"FOO": "1"}, "metadata": "{}"}"#);
    assert_failure(&output);
    assert_stderr_contains(&output, "must be a JSON-encoded string");
    assert_stderr_contains(&output, "→");
}

#[test]
fn test_field_with_invalid_inner_json() {
    let t = Test::new();

    let output = t.env(r#"{"env": "{\"FOO\":", "metadata": "{}"}"#);
    assert_failure(&output);
    assert_stderr_contains(&output, "does not contain valid JSON");
}

#[test]
fn test_field_inner_not_a_mapping() {
    let t = Test::new();

    let output = t.env(r#"{"env": "[1,2]", "metadata": "{}"}"#);
    assert_failure(&output);
    assert_stderr_contains(&output, "must decode to a mapping");
}

#[test]
fn test_exit_code_is_one() {
    let t = Test::new();

    let output = t.env("{}");
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_completions_bash() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("_taskenv") || out.contains("complete"));
}

#[test]
fn test_completions_use_binary_name() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "fish"]).output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("complete -c taskenv"));
}

#[test]
fn test_completions_invalid_shell() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "tcsh"]).output().unwrap();
    assert_failure(&output);
}
