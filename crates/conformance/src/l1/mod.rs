//! Level 1: per-function tests
//!
//! Every HAL operation gets a positive test (valid arguments, `RETURN_OK`,
//! output inside its documented domain) and, where it takes a pointer or a
//! ranged argument, a negative test (`RETURN_ERR` for a null pointer, an
//! out-of-range index or a malformed value).
//!
//! The tests live in one table per subsystem. Fan/thermal and LED tables
//! are tagged with the manager they need and only registered when the
//! platform declares that capability.

mod device;
mod dhcp;
mod dscp;
mod firmware;
mod led;
mod macsec;
mod memory;
mod power;
mod services;
mod thermal;

pub(crate) use memory::WAN_INTERFACE;

use crate::registry::{register_table, Capabilities, Registry, RegistrationError, TableEntry};

/// Suite name.
pub const SUITE_NAME: &str = "L1 platform_hal";

/// The full L1 table in registration order, before capability filtering.
pub fn entries() -> impl Iterator<Item = &'static TableEntry> {
    device::TESTS
        .iter()
        .chain(services::TESTS)
        .chain(memory::TESTS)
        .chain(led::TESTS)
        .chain(thermal::TESTS)
        .chain(macsec::TESTS)
        .chain(dhcp::TESTS)
        .chain(dscp::TESTS)
        .chain(power::TESTS)
        .chain(firmware::TESTS)
}

/// Create the L1 suite and register every entry `caps` selects.
///
/// Returns the number of registered tests.
pub fn register(registry: &mut Registry, caps: Capabilities) -> Result<usize, RegistrationError> {
    let suite = registry.add_suite(SUITE_NAME, None)?;
    let added = register_table(registry, suite, entries(), caps)?;
    tracing::info!(suite = SUITE_NAME, tests = added, ?caps, "suite registered");
    Ok(added)
}
