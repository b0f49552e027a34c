#![cfg(feature = "cli")]

use std::process::Command;

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_conlog"))
        .arg("--color")
        .arg("never")
        .args(args)
        .output()
        .expect("failed to run conlog")
}

#[test]
fn info_prints_only_the_message_line() {
    let output = run(&["--no-timestamp", "info", "hi"]);
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "   INFO    hi\n");
    assert!(output.stderr.is_empty());
}

#[test]
fn malformed_json_is_reported_on_stderr() {
    let output = run(&["json", "not json"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("ERROR"), "{stderr:?}");
    assert!(stderr.contains("invalid JSON"), "{stderr:?}");
}

#[test]
fn unprintable_json_kind_is_reported_on_stderr() {
    let output = run(&["json", r#"{"kind":"pause","args":[]}"#]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot be printed"), "{stderr:?}");
}

#[test]
fn verbose_adds_diagnostic_chatter() {
    let quiet = run(&["json", r#"{"kind":"log","args":["x"]}"#]);
    assert!(quiet.status.success());
    assert!(!String::from_utf8_lossy(&quiet.stdout).contains("Diagnostics enabled"));

    let verbose = run(&["--verbose", "json", r#"{"kind":"log","args":["x"]}"#]);
    assert!(verbose.status.success());
    assert!(String::from_utf8_lossy(&verbose.stdout).contains("Diagnostics enabled"));
}
