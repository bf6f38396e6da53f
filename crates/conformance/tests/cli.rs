//! The `hal-conformance` binary: exit codes and startup failures.

// Test file: unwrap/expect/panic acceptable in test code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

fn hal_conformance(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hal-conformance"))
        .current_dir(dir)
        .args(args)
        .env("RUST_LOG", "info")
        .env("NO_COLOR", "1")
        .output()
        .unwrap()
}

fn with_config(contents: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("platform_config"), contents).unwrap();
    dir
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn missing_config_exits_before_registration() {
    let dir = TempDir::new().unwrap();
    let output = hal_conformance(dir.path(), &[]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("platform configuration"), "{stderr}");
    assert!(!stderr.contains("suite registered"), "{stderr}");
    assert!(stdout(&output).is_empty());
}

#[test]
fn empty_config_exits_before_registration() {
    let dir = with_config("");
    let output = hal_conformance(dir.path(), &["--list"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is empty"), "{stderr}");
    assert!(!stderr.contains("suite registered"), "{stderr}");
    assert!(stdout(&output).is_empty());
}

#[test]
fn list_prints_registered_tests() {
    let dir = with_config(r#"{"MaxEthPort": 4}"#);
    let output = hal_conformance(dir.path(), &["--list", "--level", "l2"]);

    assert_eq!(output.status.code(), Some(0));
    let listed = stdout(&output);
    assert_eq!(listed.lines().count(), hal_conformance::l2::TESTS.len());
    assert!(listed.lines().all(|l| l.starts_with("L2 platform_hal/")));
}

#[test]
fn list_respects_manager_flags() {
    let dir = with_config(r#"{"MaxEthPort": 4}"#);
    let plain = stdout(&hal_conformance(dir.path(), &["--list", "--level", "l1"]));
    let managed = stdout(&hal_conformance(
        dir.path(),
        &["--list", "--level", "l1", "--thermal-manager", "--led-manager"],
    ));

    assert!(managed.lines().count() > plain.lines().count());
    assert!(managed.contains("/set_fan_speed_positive"));
    assert!(managed.contains("/set_led_positive"));
}

#[test]
fn stub_run_exits_zero_unless_strict() {
    let dir = with_config(r#"{"MaxEthPort": 4}"#);

    let relaxed = hal_conformance(dir.path(), &[]);
    assert_eq!(relaxed.status.code(), Some(0));
    assert!(stdout(&relaxed).contains("failed"));

    let strict = hal_conformance(dir.path(), &["--strict"]);
    assert_eq!(strict.status.code(), Some(2));
}

#[test]
fn simulated_run_passes_strict() {
    let dir = with_config(r#"{"MaxEthPort": 4}"#);
    let output = hal_conformance(
        dir.path(),
        &["--backend", "simulated", "--thermal-manager", "--led-manager", "--strict", "--json"],
    );

    assert_eq!(output.status.code(), Some(0), "{}", stdout(&output));
    let report: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    let outcomes = report["outcomes"].as_array().unwrap();
    assert!(!outcomes.is_empty());
    assert!(outcomes.iter().all(|o| o["status"] == "passed"));
}

#[test]
fn oversized_port_count_falls_back_to_default() {
    let dir = with_config(r#"{"MaxEthPort": 4294967295}"#);
    let output = hal_conformance(
        dir.path(),
        &["--backend", "simulated", "--filter", "macsec", "--strict"],
    );

    assert_eq!(output.status.code(), Some(0), "{}", stdout(&output));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no usable port count"), "{stderr}");
}

#[test]
fn closed_stdout_is_not_a_setup_failure() {
    let dir = with_config(r#"{"MaxEthPort": 4}"#);
    let mut child = Command::new(env!("CARGO_BIN_EXE_hal-conformance"))
        .current_dir(dir.path())
        .arg("--list")
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    drop(child.stdout.take());

    assert_eq!(child.wait().unwrap().code(), Some(0));
}
