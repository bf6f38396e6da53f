//! MACsec (IEEE 802.1AE) on the CPU-facing Ethernet ports
//!
//! Ports are indexed `0..MaxEthPort`; the port count comes from the
//! platform configuration, not from the HAL.

use crate::status::HalResult;

/// Per-port MACsec control.
pub trait Macsec {
    /// Whether MACsec is enabled on `eth_port`.
    fn get_macsec_enable(&mut self, eth_port: u32, enabled: Option<&mut bool>) -> HalResult;

    /// Enable or disable MACsec on `eth_port`.
    fn set_macsec_enable(&mut self, eth_port: u32, enabled: bool) -> HalResult;

    /// Whether a MACsec session is operational on `eth_port`.
    fn get_macsec_operational_status(&mut self, eth_port: u32, up: Option<&mut bool>) -> HalResult;

    /// Start MACsec on `eth_port`, giving up after `timeout_secs` (`0` = no
    /// timeout, negative values are rejected).
    fn start_macsec(&mut self, eth_port: u32, timeout_secs: i32) -> HalResult;

    /// Stop MACsec on `eth_port`.
    fn stop_macsec(&mut self, eth_port: u32) -> HalResult;
}
