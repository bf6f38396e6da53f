//! Full runs: configuration from disk, both suites registered, every test
//! executed once against a HAL implementation.

// Test file: unwrap/expect/panic acceptable in test code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;

use hal_conformance::{config, l1, l2, register_suites, runner, Capabilities, Level, Registry, Status, TestContext};
use platform_hal::mocks::SimulatedHal;
use platform_hal::{PsmState, StubHal};
use tempfile::TempDir;

fn four_port_config() -> hal_conformance::PlatformConfig {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("platform_config");
    fs::write(&path, r#"{"MaxEthPort": 4}"#).unwrap();
    config::load(&path).unwrap()
}

#[test]
fn simulated_platform_passes_every_suite() {
    let config = four_port_config();
    assert_eq!(config.max_eth_port, 4);

    let mut registry = Registry::new();
    let registered = register_suites(&mut registry, Level::All, Capabilities::all()).unwrap();

    let mut hal = SimulatedHal::new(config.max_eth_port);
    let mut ctx = TestContext::new(&mut hal, &config);
    let report = runner::run(&registry, &mut ctx, None);

    let failures: Vec<_> = report
        .outcomes
        .iter()
        .filter(|o| o.status == Status::Failed)
        .map(|o| format!("{}: {}", o.qualified_name(), o.message.as_deref().unwrap_or("")))
        .collect();
    assert!(failures.is_empty(), "{failures:#?}");
    assert_eq!(report.passed(), registered);
    assert!(hal.databases_ready());
}

#[test]
fn stub_runs_every_test_exactly_once() {
    let config = four_port_config();
    let mut registry = Registry::new();
    let registered = l1::register(&mut registry, Capabilities::default()).unwrap();

    let mut hal = StubHal::new();
    let mut ctx = TestContext::new(&mut hal, &config);
    let report = runner::run(&registry, &mut ctx, None);

    let expected: Vec<&str> = l1::entries()
        .filter(|e| Capabilities::default().satisfies(e.requires))
        .map(|e| e.name)
        .collect();
    let executed: Vec<&str> = report.outcomes.iter().map(|o| o.name).collect();
    assert_eq!(executed.len(), registered);
    assert_eq!(executed, expected);
    assert_eq!(report.skipped(), 0);

    // The stub reports success for invalid arguments, so negative tests fail.
    assert!(report.failed() > 0);
    let null_check = report.outcome(l1::SUITE_NAME, "get_model_name_null").unwrap();
    assert_eq!(null_check.status, Status::Failed);
    assert!(null_check.message.as_deref().unwrap().contains("expected RETURN_ERR"));
    let init = report.outcome(l1::SUITE_NAME, "pandm_db_init_positive").unwrap();
    assert_eq!(init.status, Status::Passed);
}

#[test]
fn stub_with_every_manager_never_panics() {
    let config = four_port_config();
    let mut registry = Registry::new();
    register_suites(&mut registry, Level::All, Capabilities::all()).unwrap();

    let mut hal = StubHal::new();
    let mut ctx = TestContext::new(&mut hal, &config);
    let report = runner::run(&registry, &mut ctx, None);

    assert_eq!(report.outcomes.len(), registry.test_count());
    assert!(report
        .outcomes
        .iter()
        .filter_map(|o| o.message.as_deref())
        .all(|m| !m.contains("panicked")));
    assert!(report.outcome(l2::SUITE_NAME, "memory_accounting_consistent").is_some());
}

#[test]
fn port_tests_pass_vacuously_without_ports() {
    let config = hal_conformance::PlatformConfig::default();
    let mut registry = Registry::new();
    l1::register(&mut registry, Capabilities::default()).unwrap();

    let mut hal = SimulatedHal::new(0);
    let mut ctx = TestContext::new(&mut hal, &config);
    let report = runner::run(&registry, &mut ctx, Some("macsec"));

    assert!(report.executed() > 0);
    assert_eq!(report.passed(), report.executed());
}

#[test]
fn filter_runs_only_matching_tests() {
    let config = four_port_config();
    let mut registry = Registry::new();
    register_suites(&mut registry, Level::All, Capabilities::default()).unwrap();

    let mut hal = SimulatedHal::new(config.max_eth_port);
    let mut ctx = TestContext::new(&mut hal, &config);
    let report = runner::run(&registry, &mut ctx, Some("L2 platform_hal/"));

    assert_eq!(report.executed(), l2::TESTS.len());
    assert!(report
        .outcomes
        .iter()
        .filter(|o| o.suite == l1::SUITE_NAME)
        .all(|o| o.status == Status::Skipped));
}

#[test]
fn power_test_leaves_platform_on_mains() {
    let config = four_port_config();
    let mut registry = Registry::new();
    l1::register(&mut registry, Capabilities::default()).unwrap();

    let mut hal = SimulatedHal::new(config.max_eth_port);
    let mut ctx = TestContext::new(&mut hal, &config);
    let report = runner::run(&registry, &mut ctx, Some("set_low_power_mode_state_positive"));

    assert_eq!(report.executed(), 1);
    assert!(report.all_passed());
    assert_eq!(hal.psm_state(), Some(PsmState::Ac));
}

#[test]
fn oversized_port_count_never_reaches_the_suites() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("platform_config");
    fs::write(&path, r#"{"MaxEthPort": 4294967295}"#).unwrap();
    let config = config::load(&path).unwrap();
    assert_eq!(config.max_eth_port, 0);

    let mut registry = Registry::new();
    l1::register(&mut registry, Capabilities::default()).unwrap();

    let mut hal = StubHal::new();
    let mut ctx = TestContext::new(&mut hal, &config);
    let report = runner::run(&registry, &mut ctx, Some("macsec"));
    assert!(report.executed() > 0);
    assert_eq!(report.outcomes.len(), registry.test_count());
}
