//! Suite registration: every selected table entry is attached exactly once,
//! in table order, and a suite that cannot be created gets no tests.

// Test file: unwrap/expect/panic acceptable in test code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashSet;

use hal_conformance::{l1, l2, register_suites, Capabilities, Level, Registry, RegistrationError, Requirement};

fn all_capability_sets() -> [Capabilities; 4] {
    [
        Capabilities::default(),
        Capabilities {
            thermal_manager: true,
            led_manager: false,
        },
        Capabilities {
            thermal_manager: false,
            led_manager: true,
        },
        Capabilities::all(),
    ]
}

#[test]
fn l1_registers_every_selected_entry_in_table_order() {
    for caps in all_capability_sets() {
        let mut registry = Registry::new();
        let added = l1::register(&mut registry, caps).unwrap();

        let expected: Vec<&str> = l1::entries()
            .filter(|e| caps.satisfies(e.requires))
            .map(|e| e.name)
            .collect();
        let suite = registry.suite_by_name(l1::SUITE_NAME).unwrap();
        let registered: Vec<&str> = suite.test_names().collect();

        assert_eq!(added, expected.len(), "{caps:?}");
        assert_eq!(registered, expected, "{caps:?}");
    }
}

#[test]
fn l1_without_managers_leaves_out_gated_entries() {
    let mut registry = Registry::new();
    l1::register(&mut registry, Capabilities::default()).unwrap();
    let suite = registry.suite_by_name(l1::SUITE_NAME).unwrap();

    let gated: HashSet<&str> = l1::entries()
        .filter(|e| e.requires != Requirement::Always)
        .map(|e| e.name)
        .collect();
    assert!(!gated.is_empty());
    assert!(suite.test_names().all(|name| !gated.contains(name)));
    assert!(!suite.test_names().any(|name| name == "set_fan_speed_positive"));
}

#[test]
fn table_names_are_unique() {
    let names: Vec<&str> = l1::entries().map(|e| e.name).collect();
    let unique: HashSet<&str> = names.iter().copied().collect();
    assert_eq!(names.len(), unique.len());

    let l2_unique: HashSet<&str> = l2::TESTS.iter().map(|e| e.name).collect();
    assert_eq!(l2_unique.len(), l2::TESTS.len());
}

#[test]
fn l2_registers_fixed_list_with_setup() {
    let mut registry = Registry::new();
    let added = l2::register(&mut registry).unwrap();
    let suite = registry.suite_by_name(l2::SUITE_NAME).unwrap();

    assert_eq!(added, l2::TESTS.len());
    assert!(suite.setup().is_some());
    let expected: Vec<&str> = l2::TESTS.iter().map(|e| e.name).collect();
    assert_eq!(suite.test_names().collect::<Vec<_>>(), expected);
}

#[test]
fn failed_suite_creation_registers_nothing() {
    let mut registry = Registry::new();
    let first = l1::register(&mut registry, Capabilities::all()).unwrap();

    let again = l1::register(&mut registry, Capabilities::all());
    assert_eq!(
        again,
        Err(RegistrationError::DuplicateSuite(l1::SUITE_NAME.to_string()))
    );
    assert_eq!(registry.suites().len(), 1);
    assert_eq!(registry.test_count(), first);
}

#[test]
fn levels_select_suites() {
    let cases = [
        (Level::L1, vec![l1::SUITE_NAME]),
        (Level::L2, vec![l2::SUITE_NAME]),
        (Level::All, vec![l1::SUITE_NAME, l2::SUITE_NAME]),
    ];
    for (level, expected) in cases {
        let mut registry = Registry::new();
        let added = register_suites(&mut registry, level, Capabilities::default()).unwrap();
        let names: Vec<&str> = registry.suites().iter().map(|s| s.name()).collect();
        assert_eq!(names, expected, "{level:?}");
        assert_eq!(added, registry.test_count());
    }
}
