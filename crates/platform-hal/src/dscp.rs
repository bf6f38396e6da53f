//! DSCP traffic classification counters
//!
//! Counting is started per WAN interface for a set of DSCP code points; the
//! HAL then reports per-client byte counts for every counted code point.

use crate::status::{HalError, HalResult};
use crate::types::MacAddress;

/// Highest DSCP code point.
pub const DSCP_MAX: u8 = 63;

/// Most code points in one [`DscpSet`].
pub const MAX_DSCP_VALUES: usize = 64;

/// Most clients in a [`DscpClientList`].
pub const MAX_DSCP_CLIENTS: usize = 16;

/// Most counters per client.
pub const MAX_DSCP_COUNTS: usize = 16;

/// WAN interface selector (C `WAN_INTERFACE`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum WanInterface {
    /// DOCSIS cable modem WAN
    #[default]
    Docsis = 1,
    /// Ethernet WAN
    Ewan = 2,
}

impl WanInterface {
    /// Both interfaces.
    pub const ALL: [Self; 2] = [Self::Docsis, Self::Ewan];
}

impl TryFrom<u32> for WanInterface {
    type Error = HalError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Docsis),
            2 => Ok(Self::Ewan),
            _ => Err(HalError::InvalidArgument),
        }
    }
}

/// Start/stop selector (C `TRAFFIC_CNT_COMMAND`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum TrafficCountCommand {
    /// Start counting the given code points
    Start = 1,
    /// Stop counting; the code point list is ignored
    Stop = 2,
}

impl TryFrom<u32> for TrafficCountCommand {
    type Error = HalError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(Self::Start),
            2 => Ok(Self::Stop),
            _ => Err(HalError::InvalidArgument),
        }
    }
}

/// Parsed DSCP code point list, e.g. `"10,20,46"`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DscpSet(heapless::Vec<u8, MAX_DSCP_VALUES>);

impl DscpSet {
    /// Parse a comma-separated list of distinct code points in `0..=63`.
    ///
    /// Whitespace around entries is ignored; empty lists and empty entries
    /// are rejected.
    pub fn parse(text: &str) -> HalResult<Self> {
        let mut values = heapless::Vec::new();
        for entry in text.split(',') {
            let value: u8 = entry
                .trim()
                .parse()
                .map_err(|_| HalError::InvalidArgument)?;
            if value > DSCP_MAX || values.contains(&value) {
                return Err(HalError::InvalidArgument);
            }
            values.push(value).map_err(|_| HalError::InvalidArgument)?;
        }
        Ok(Self(values))
    }

    /// Code points in the order given.
    pub fn values(&self) -> &[u8] {
        &self.0
    }

    /// Whether `dscp` is in the set.
    pub fn contains(&self, dscp: u8) -> bool {
        self.0.contains(&dscp)
    }
}

/// Byte counters for one code point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DscpCount {
    /// Code point
    pub dscp: u8,
    /// Bytes received
    pub rx_bytes: u64,
    /// Bytes transmitted
    pub tx_bytes: u64,
}

/// Counters for one LAN client.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DscpClient {
    /// Client MAC address
    pub mac: MacAddress,
    /// One entry per counted code point
    pub counts: heapless::Vec<DscpCount, MAX_DSCP_COUNTS>,
}

/// Caller-owned client list.
pub type DscpClientList = heapless::Vec<DscpClient, MAX_DSCP_CLIENTS>;

/// DSCP traffic counting.
pub trait DscpControl {
    /// Start or stop counting on `interface`.
    ///
    /// [`TrafficCountCommand::Start`] requires a list accepted by
    /// [`DscpSet::parse`]; [`TrafficCountCommand::Stop`] ignores `dscp_list`.
    fn set_dscp(
        &mut self,
        interface: WanInterface,
        command: TrafficCountCommand,
        dscp_list: Option<&str>,
    ) -> HalResult;

    /// Per-client counters on `interface`. The list is cleared, then filled.
    fn get_dscp_client_list(&mut self, interface: WanInterface, clients: Option<&mut DscpClientList>) -> HalResult;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_dscp_parse_valid() {
        let set = DscpSet::parse("10, 20,46").unwrap();
        assert_eq!(set.values(), &[10, 20, 46]);
        assert!(set.contains(46));
        assert!(!set.contains(0));
    }

    #[test]
    fn test_dscp_parse_rejects_invalid() {
        assert!(DscpSet::parse("").is_err());
        assert!(DscpSet::parse("64").is_err());
        assert!(DscpSet::parse("-1").is_err());
        assert!(DscpSet::parse("10,,20").is_err());
        assert!(DscpSet::parse("10,10").is_err());
        assert!(DscpSet::parse("ef").is_err());
    }

    #[test]
    fn test_wan_interface_codes() {
        assert_eq!(WanInterface::try_from(2), Ok(WanInterface::Ewan));
        assert_eq!(WanInterface::try_from(0), Err(HalError::InvalidArgument));
        assert_eq!(TrafficCountCommand::try_from(3), Err(HalError::InvalidArgument));
    }
}
