//! Platform Hardware Abstraction Layer (HAL) for RDK-B broadband gateways
//!
//! This crate is the call contract between the RDK-B middleware and a
//! vendor's platform code, expressed as traits. A vendor port implements the
//! traits against real hardware; the conformance harness (`hal-conformance`)
//! drives any implementation through the same surface.
//!
//! # Architecture Layers
//!
//! ```text
//! Conformance harness (hal-conformance: L1 / L2 suites)
//!         ↓
//! Platform HAL (this crate - trait abstractions)
//!         ↓
//! Vendor implementation  |  StubHal  |  SimulatedHal
//! ```
//!
//! # Subsystems
//!
//! - [`DeviceInfo`] - identity strings, base MAC, CM variant
//! - [`NetworkServices`] - Telnet/SSH/SNMP toggles, web UI timeout and access
//! - [`MemoryStats`] - RAM/flash counters, interface statistics
//! - [`LedControl`] - front panel LED
//! - [`ThermalControl`] - fans, input power, temperatures
//! - [`Macsec`] - per-port MACsec
//! - [`DhcpOptions`] - DHCPv4/v6 requested and sent option lists
//! - [`DscpControl`] - DSCP traffic counting
//! - [`PowerControl`] / [`FirmwareBanks`] - power-state manager, image banks
//!
//! # Return convention
//!
//! Every status-returning operation yields [`HalResult`]. Output parameters
//! are `Option<&mut T>`; `None` stands for the C null pointer and a conforming
//! implementation must answer it with [`HalError::NullPointer`] without
//! touching anything. [`status_code`] maps a result onto the wire values
//! [`RETURN_OK`] / [`RETURN_ERR`].
//!
//! # Implementations
//!
//! - [`StubHal`] - the shipped placeholder: ignores its arguments, always succeeds
//! - [`mocks::SimulatedHal`] (`std` feature) - in-memory double honouring the full contract
//!
//! # Example
//!
//! ```
//! use platform_hal::{status_code, DeviceInfo, InfoString, StubHal, RETURN_OK};
//!
//! let mut hal = StubHal::new();
//! let mut serial = InfoString::new();
//! let result = hal.get_serial_number(Some(&mut serial));
//! assert_eq!(status_code(&result), RETURN_OK);
//! ```

// ── Lint policy ─────────────────────────────────────────────────────────────
#![deny(clippy::unwrap_used)] // no .unwrap() in production code
#![deny(clippy::expect_used)] // no .expect() in production code
#![deny(clippy::panic)] // no panic!() in production code
#![deny(unused_must_use)]
// all Results must be handled
// ────────────────────────────────────────────────────────────────────────────
#![cfg_attr(not(any(test, feature = "std")), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
// Pedantic lints suppressed for this HAL crate:
#![allow(clippy::doc_markdown)] // C identifiers and wire names in doc comments
#![allow(clippy::must_use_candidate)] // HAL accessors: callers decide
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // every HAL error is a HalError; documented once in `status`

pub mod device;
pub mod dhcp;
pub mod dscp;
pub mod firmware;
pub mod led;
pub mod macsec;
pub mod memory;
pub mod power;
pub mod services;
pub mod status;
pub mod stub;
pub mod thermal;
pub mod types;

#[cfg(any(test, feature = "std"))]
pub mod mocks;

// Re-export status convention
pub use status::{status_code, HalError, HalResult, RETURN_ERR, RETURN_OK};

// Re-export shared value types
pub use types::{InfoString, MacAddress, INFO_STRING_LEN};

// Re-export subsystem traits
pub use device::DeviceInfo;
pub use dhcp::{DhcpOption, DhcpOptionList, DhcpOptions};
pub use dscp::{DscpClient, DscpClientList, DscpControl, DscpCount, DscpSet, TrafficCountCommand, WanInterface};
pub use firmware::{FirmwareBanks, FwBank, FwBankInfo, FwImageState, FwImageType};
pub use led::{LedColor, LedControl, LedParams, LedState};
pub use macsec::Macsec;
pub use memory::{CpuKind, InterfaceStats, MemoryStats, ProcMemInfo};
pub use power::{PowerControl, PsmState};
pub use services::NetworkServices;
pub use stub::StubHal;
pub use thermal::{FanError, FanSpeed, RotorLock, ThermalControl};

/// The complete platform HAL surface.
///
/// Blanket-implemented for every type that implements all subsystem traits,
/// so implementations only ever write the subsystem impls. The trait is
/// object safe; the harness drives implementations as `&mut dyn PlatformHal`.
pub trait PlatformHal:
    DeviceInfo
    + NetworkServices
    + MemoryStats
    + LedControl
    + ThermalControl
    + Macsec
    + DhcpOptions
    + DscpControl
    + PowerControl
    + FirmwareBanks
{
}

impl<T> PlatformHal for T where
    T: DeviceInfo
        + NetworkServices
        + MemoryStats
        + LedControl
        + ThermalControl
        + Macsec
        + DhcpOptions
        + DscpControl
        + PowerControl
        + FirmwareBanks
{
}
