//! Suite registry
//!
//! A [`Registry`] holds named suites, each an ordered list of
//! [`TestCase`]s plus an optional setup callback. Levels register their
//! tests through [`register_table`], which filters a declarative table of
//! [`TableEntry`] rows against the platform's [`Capabilities`].
//!
//! Creating a suite is the only step that can refuse a whole level: if
//! [`Registry::add_suite`] fails, the caller bails out before a single test
//! has been attached.

use crate::check::TestResult;
use crate::context::TestContext;

/// Test body signature.
pub type TestBody = fn(&mut TestContext<'_>) -> TestResult;

/// Suite setup callback, run once before the suite's first test.
pub type SetupFn = fn(&mut TestContext<'_>) -> TestResult;

/// Handle to a suite created by [`Registry::add_suite`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SuiteId(usize);

/// One registered test.
#[derive(Debug, Clone, Copy)]
pub struct TestCase {
    /// Name shown in listings and reports
    pub name: &'static str,
    /// Body invoked by the runner
    pub body: TestBody,
}

/// A named, ordered collection of tests.
#[derive(Debug, Clone)]
pub struct Suite {
    name: String,
    setup: Option<SetupFn>,
    tests: Vec<TestCase>,
}

impl Suite {
    /// Suite name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Setup callback, if any.
    pub fn setup(&self) -> Option<SetupFn> {
        self.setup
    }

    /// Tests in registration order.
    pub fn tests(&self) -> &[TestCase] {
        &self.tests
    }

    /// Test names in registration order.
    pub fn test_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.tests.iter().map(|t| t.name)
    }
}

/// All suites known to a run, in creation order.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    suites: Vec<Suite>,
}

impl Registry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a suite named `name`.
    ///
    /// Fails for an empty name or a name already in use; nothing is added
    /// in that case.
    pub fn add_suite(&mut self, name: &str, setup: Option<SetupFn>) -> Result<SuiteId, RegistrationError> {
        if name.trim().is_empty() {
            return Err(RegistrationError::EmptySuiteName);
        }
        if self.suites.iter().any(|s| s.name == name) {
            return Err(RegistrationError::DuplicateSuite(name.to_string()));
        }

        let id = SuiteId(self.suites.len());
        self.suites.push(Suite {
            name: name.to_string(),
            setup,
            tests: Vec::new(),
        });
        tracing::debug!(suite = name, "suite created");
        Ok(id)
    }

    /// Append a test to `suite`.
    pub fn add_test(&mut self, suite: SuiteId, name: &'static str, body: TestBody) -> Result<(), RegistrationError> {
        let target = self
            .suites
            .get_mut(suite.0)
            .ok_or(RegistrationError::UnknownSuite)?;
        if target.tests.iter().any(|t| t.name == name) {
            return Err(RegistrationError::DuplicateTest {
                suite: target.name.clone(),
                test: name,
            });
        }
        target.tests.push(TestCase { name, body });
        Ok(())
    }

    /// Suite behind `id`.
    pub fn suite(&self, id: SuiteId) -> Option<&Suite> {
        self.suites.get(id.0)
    }

    /// Suite named `name`.
    pub fn suite_by_name(&self, name: &str) -> Option<&Suite> {
        self.suites.iter().find(|s| s.name == name)
    }

    /// All suites in creation order.
    pub fn suites(&self) -> &[Suite] {
        &self.suites
    }

    /// Number of registered tests across all suites.
    pub fn test_count(&self) -> usize {
        self.suites.iter().map(|s| s.tests.len()).sum()
    }

    /// Whether nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }
}

/// Platform managers present on the device under test.
///
/// Tests for a manager the platform does not ship are left out of the
/// suite instead of being registered and failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Fan and thermal sensor management
    pub thermal_manager: bool,
    /// Front-panel LED management
    pub led_manager: bool,
}

impl Capabilities {
    /// Capabilities selected by the `thermal-manager` and `led-manager`
    /// Cargo features.
    pub const fn from_features() -> Self {
        Self {
            thermal_manager: cfg!(feature = "thermal-manager"),
            led_manager: cfg!(feature = "led-manager"),
        }
    }

    /// Every manager present.
    pub const fn all() -> Self {
        Self {
            thermal_manager: true,
            led_manager: true,
        }
    }

    /// Whether a table entry with `requires` is selected.
    pub const fn satisfies(&self, requires: Requirement) -> bool {
        match requires {
            Requirement::Always => true,
            Requirement::ThermalManager => self.thermal_manager,
            Requirement::LedManager => self.led_manager,
        }
    }
}

/// Capability a table entry needs to be registered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Registered on every platform
    Always,
    /// Needs [`Capabilities::thermal_manager`]
    ThermalManager,
    /// Needs [`Capabilities::led_manager`]
    LedManager,
}

/// Row of a declarative registration table.
#[derive(Debug, Clone, Copy)]
pub struct TableEntry {
    /// Test name
    pub name: &'static str,
    /// Test body
    pub body: TestBody,
    /// Capability the test needs
    pub requires: Requirement,
}

/// Build a `&[TableEntry]` from test functions, named after the functions.
///
/// ```ignore
/// const TESTS: &[TableEntry] = test_table![get_model_name_positive, get_model_name_null];
/// const FAN_TESTS: &[TableEntry] = test_table![ThermalManager => get_fan_speed_positive];
/// ```
#[macro_export]
macro_rules! test_table {
    ($requires:ident => $($name:ident),* $(,)?) => {
        &[
            $(
                $crate::registry::TableEntry {
                    name: stringify!($name),
                    body: $name,
                    requires: $crate::registry::Requirement::$requires,
                }
            ),*
        ]
    };
    ($($name:ident),* $(,)?) => {
        $crate::test_table!(Always => $($name),*)
    };
}

/// Register every entry of `table` whose requirement `caps` satisfies.
///
/// Returns how many tests were added.
pub fn register_table<'t>(
    registry: &mut Registry,
    suite: SuiteId,
    table: impl IntoIterator<Item = &'t TableEntry>,
    caps: Capabilities,
) -> Result<usize, RegistrationError> {
    let mut added = 0usize;
    for entry in table {
        if !caps.satisfies(entry.requires) {
            tracing::debug!(test = entry.name, requires = ?entry.requires, "test not selected");
            continue;
        }
        registry.add_test(suite, entry.name, entry.body)?;
        added = added.saturating_add(1);
    }
    Ok(added)
}

/// Registration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    /// Suite name is empty.
    EmptySuiteName,
    /// A suite with this name already exists.
    DuplicateSuite(String),
    /// The suite handle does not belong to this registry.
    UnknownSuite,
    /// The suite already has a test with this name.
    DuplicateTest {
        /// Suite name
        suite: String,
        /// Test name
        test: &'static str,
    },
}

impl core::fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::EmptySuiteName => write!(f, "suite name is empty"),
            Self::DuplicateSuite(name) => write!(f, "suite {name:?} already exists"),
            Self::UnknownSuite => write!(f, "unknown suite handle"),
            Self::DuplicateTest { suite, test } => {
                write!(f, "suite {suite:?} already has a test named {test:?}")
            }
        }
    }
}

impl std::error::Error for RegistrationError {}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    fn first(_: &mut TestContext<'_>) -> TestResult {
        Ok(())
    }

    fn second(_: &mut TestContext<'_>) -> TestResult {
        Ok(())
    }

    fn third(_: &mut TestContext<'_>) -> TestResult {
        Ok(())
    }

    const TABLE: &[TableEntry] = &[
        TableEntry {
            name: "first",
            body: first,
            requires: Requirement::Always,
        },
        TableEntry {
            name: "second",
            body: second,
            requires: Requirement::ThermalManager,
        },
        TableEntry {
            name: "third",
            body: third,
            requires: Requirement::LedManager,
        },
    ];

    #[test]
    fn test_table_registered_in_order() {
        let mut registry = Registry::new();
        let suite = registry.add_suite("unit", None).unwrap();
        let added = register_table(&mut registry, suite, TABLE, Capabilities::all()).unwrap();

        assert_eq!(added, TABLE.len());
        let names: Vec<_> = registry.suite(suite).unwrap().test_names().collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_capabilities_filter_table() {
        let cases = [
            (Capabilities::default(), vec!["first"]),
            (
                Capabilities {
                    thermal_manager: true,
                    led_manager: false,
                },
                vec!["first", "second"],
            ),
            (
                Capabilities {
                    thermal_manager: false,
                    led_manager: true,
                },
                vec!["first", "third"],
            ),
            (Capabilities::all(), vec!["first", "second", "third"]),
        ];

        for (caps, expected) in cases {
            let mut registry = Registry::new();
            let suite = registry.add_suite("unit", None).unwrap();
            register_table(&mut registry, suite, TABLE, caps).unwrap();
            let names: Vec<_> = registry.suite(suite).unwrap().test_names().collect();
            assert_eq!(names, expected, "{caps:?}");
        }
    }

    #[test]
    fn test_suite_creation_failures() {
        let mut registry = Registry::new();
        assert_eq!(registry.add_suite("", None), Err(RegistrationError::EmptySuiteName));
        assert_eq!(registry.add_suite("  ", None), Err(RegistrationError::EmptySuiteName));
        assert!(registry.is_empty());

        registry.add_suite("L1", None).unwrap();
        assert_eq!(
            registry.add_suite("L1", None),
            Err(RegistrationError::DuplicateSuite("L1".to_string()))
        );
        assert_eq!(registry.suites().len(), 1);
    }

    #[test]
    fn test_add_test_rejects_duplicates_and_foreign_handles() {
        let mut registry = Registry::new();
        let suite = registry.add_suite("unit", None).unwrap();
        registry.add_test(suite, "first", first).unwrap();
        assert!(matches!(
            registry.add_test(suite, "first", second),
            Err(RegistrationError::DuplicateTest { test: "first", .. })
        ));

        let mut other = Registry::new();
        assert_eq!(other.add_test(suite, "first", first), Err(RegistrationError::UnknownSuite));
        assert_eq!(registry.test_count(), 1);
    }

    #[test]
    fn test_table_macro_names_entries_after_functions() {
        let table: &[TableEntry] = test_table![first, second];
        let gated: &[TableEntry] = test_table![LedManager => third];

        assert_eq!(table.len(), 2);
        assert!(table.iter().all(|e| e.requires == Requirement::Always));
        assert!(matches!(table, [a, b] if a.name == "first" && b.name == "second"));
        assert!(matches!(gated, [e] if e.name == "third" && e.requires == Requirement::LedManager));
    }
}
