//! Conformance suites for the RDK-B platform HAL
//!
//! Builds Level-1 (per-function) and Level-2 (cross-function) suites against
//! any [`PlatformHal`](platform_hal::PlatformHal) implementation, runs them
//! and reports per-test outcomes.
//!
//! # Flow
//!
//! 1. [`config::load`] reads `MaxEthPort` from `./platform_config`.
//! 2. [`l1::register`] and [`l2::register`] build named suites in a
//!    [`Registry`]; L1 entries are filtered by the platform [`Capabilities`].
//! 3. [`runner::run`] invokes every test once against a [`TestContext`] and
//!    returns a [`Report`].
//!
//! ```
//! use hal_conformance::{l1, l2, runner, Capabilities, PlatformConfig, Registry, TestContext};
//! use platform_hal::mocks::SimulatedHal;
//!
//! let config = PlatformConfig::with_max_eth_port(2);
//! let mut registry = Registry::new();
//! l1::register(&mut registry, Capabilities::all()).unwrap();
//! l2::register(&mut registry).unwrap();
//!
//! let mut hal = SimulatedHal::new(config.max_eth_port);
//! let mut ctx = TestContext::new(&mut hal, &config);
//! let report = runner::run(&registry, &mut ctx, None);
//! assert!(report.all_passed());
//! ```

#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::doc_markdown)] // HAL and wire names in doc comments
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::unnecessary_wraps)] // test bodies share one signature

pub mod check;
pub mod config;
pub mod context;
pub mod l1;
pub mod l2;
pub mod registry;
pub mod runner;

pub use check::{Failure, TestResult};
pub use config::{ConfigError, PlatformConfig, DEFAULT_CONFIG_PATH};
pub use context::TestContext;
pub use registry::{Capabilities, Registry, RegistrationError, Requirement, Suite, SuiteId, TableEntry, TestCase};
pub use runner::{Outcome, Report, Status};

/// Which suites to register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Level {
    /// Per-function suite only
    L1,
    /// Cross-function suite only
    L2,
    /// Both suites
    #[default]
    All,
}

/// Register the suites selected by `level`.
///
/// Stops at the first suite that cannot be created; tests already attached
/// to earlier suites stay registered. Returns the total number of tests.
pub fn register_suites(registry: &mut Registry, level: Level, caps: Capabilities) -> Result<usize, RegistrationError> {
    let mut added = 0usize;
    if matches!(level, Level::L1 | Level::All) {
        added = added.saturating_add(l1::register(registry, caps)?);
    }
    if matches!(level, Level::L2 | Level::All) {
        added = added.saturating_add(l2::register(registry)?);
    }
    Ok(added)
}
