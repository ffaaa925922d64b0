#![cfg(unix)]

mod common;

use common::*;

#[test]
fn key_is_file_name_slash_version() {
    let env = TestEnv::with_function();

    let result = env.run(&["key", "--version", "0.0.5"]);

    assert!(result.success, "{}", result.combined_output());
    let key = result.stdout.trim();
    let (file_name, version) = key.rsplit_once('/').unwrap();
    assert!(file_name.ends_with(".zip"));
    assert_eq!(version, "0.0.5");
}

#[test]
fn version_changes_key_but_not_file_name() {
    let env = TestEnv::with_function();

    let a = env.run(&["key", "--version", "0.0.5"]);
    let b = env.run(&["key", "--version", "0.0.6"]);

    assert!(a.success && b.success);
    let (file_a, _) = a.stdout.trim().rsplit_once('/').unwrap();
    let (file_b, _) = b.stdout.trim().rsplit_once('/').unwrap();
    assert_eq!(file_a, file_b);
    assert_ne!(a.stdout, b.stdout);
}

#[test]
fn invalid_version_is_rejected_before_building() {
    let env = TestEnv::with_function();

    let result = env.run(&["key", "--version", "a/b"]);

    assert_eq!(result.exit_code, 1);
    assert!(result.stderr.contains("invalid version label"), "{}", result.stderr);
    assert!(!env.project_path("dist").exists());
}

#[test]
fn key_json_reports_each_step() {
    let env = TestEnv::with_function();

    let result = env.run(&["--json", "key", "--version", "1"]);

    assert!(result.success, "{}", result.combined_output());
    let events: Vec<String> = result
        .json_lines()
        .iter()
        .map(|l| l["event"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(events, vec!["bundled", "packaged", "keyed", "result"]);
    let last = result.json_lines().pop().unwrap();
    assert_eq!(last["version"], "1");
}

#[test]
fn failure_in_json_mode_emits_error_event() {
    let env = TestEnv::new();

    let result = env.run(&["--json", "key", "--version", "1"]);

    assert_eq!(result.exit_code, 1);
    let last = result.json_lines().pop().unwrap();
    assert_eq!(last["event"], "error");
    assert_eq!(last["command"], "key");
}
