//! End-to-end tests that spawn the `vetevents` binary.
//!
//! Each test runs in a fresh temporary working directory with the
//! `EVENTBRITE_*` variables cleared, so only what the test sets is seen.

use std::path::Path;
use std::process::{Command, Output};

use serde_json::json;

fn vetevents(dir: &Path, envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vetevents"));
    cmd.current_dir(dir);
    for (key, _) in std::env::vars() {
        if key.starts_with("EVENTBRITE_") || key == "VNN_USER_AGENT" {
            cmd.env_remove(key);
        }
    }
    cmd.envs(envs.iter().copied());
    cmd.output().expect("failed to spawn vetevents")
}

fn read_json(path: &Path) -> serde_json::Value {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn missing_token_exits_2_with_failure_payload() {
    let dir = tempfile::tempdir().unwrap();

    let output = vetevents(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(2));
    assert_eq!(
        read_json(&dir.path().join("events.json")),
        json!({"generated": false, "error": "EVENTBRITE_TOKEN is not set"})
    );
    let md = std::fs::read_to_string(dir.path().join("events.md")).unwrap();
    assert_eq!(
        md,
        "# Upcoming Veteran Events in Montana and Wyoming\n\n\
         No events found within the next 60 days.\n"
    );
}

#[test]
fn empty_token_counts_as_missing() {
    let dir = tempfile::tempdir().unwrap();
    let output = vetevents(dir.path(), &[("EVENTBRITE_TOKEN", "")]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn invalid_config_value_exits_1_with_failure_payload() {
    let dir = tempfile::tempdir().unwrap();

    let output = vetevents(
        dir.path(),
        &[("EVENTBRITE_TOKEN", "t"), ("EVENTBRITE_DAYS", "sixty")],
    );

    assert_eq!(output.status.code(), Some(1));
    let payload = read_json(&dir.path().join("events.json"));
    assert_eq!(payload["generated"], json!(false));
    assert!(
        payload["error"]
            .as_str()
            .unwrap()
            .contains("EVENTBRITE_DAYS"),
        "{payload}"
    );
    assert!(dir.path().join("events.md").exists());
}

#[test]
fn unreachable_api_exits_1() {
    let dir = tempfile::tempdir().unwrap();

    let output = vetevents(
        dir.path(),
        &[
            ("EVENTBRITE_TOKEN", "t"),
            ("EVENTBRITE_API_BASE", "http://127.0.0.1:1/v3"),
        ],
    );

    assert_eq!(output.status.code(), Some(1));
    let payload = read_json(&dir.path().join("events.json"));
    assert!(payload["error"]
        .as_str()
        .unwrap()
        .starts_with("token_validation_request_error:"));
}

#[test]
fn output_flags_redirect_reports() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_vetevents"))
        .current_dir(dir.path())
        .env_remove("EVENTBRITE_TOKEN")
        .args(["--out-json", "out/a.json", "--out-md", "out/a.md"])
        .output()
        .expect("failed to spawn vetevents");

    assert_eq!(output.status.code(), Some(2));
    assert!(dir.path().join("out/a.json").exists());
    assert!(dir.path().join("out/a.md").exists());
    assert!(!dir.path().join("events.json").exists());
}
