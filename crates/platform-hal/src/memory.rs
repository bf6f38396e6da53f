//! Memory, flash and interface statistics

use crate::status::{HalError, HalResult};
use crate::types::InfoString;

/// Largest time offset from UTC a device may report (seconds, ±14 h).
pub const TIME_OFFSET_MAX_SECS: i32 = 50_400;

/// Network interface counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InterfaceStats {
    /// Bytes received
    pub rx_bytes: u64,
    /// Bytes transmitted
    pub tx_bytes: u64,
    /// Packets received
    pub rx_packets: u64,
    /// Packets transmitted
    pub tx_packets: u64,
}

/// CPU selector for [`MemoryStats::get_memory_paths`] (C `RDK_CPUS`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u32)]
pub enum CpuKind {
    /// Host (application) CPU
    #[default]
    Host = 0,
    /// Peer CPU on dual-processor designs
    Peer = 1,
    /// Sentinel: no such CPU. Always rejected.
    NotSupported = 2,
}

impl TryFrom<u32> for CpuKind {
    type Error = HalError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Host),
            1 => Ok(Self::Peer),
            2 => Ok(Self::NotSupported),
            _ => Err(HalError::InvalidArgument),
        }
    }
}

/// Filesystem paths of a CPU's persistent memories.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcMemInfo {
    /// DRAM-backed (tmpfs) path
    pub dram_path: InfoString,
    /// eMMC / flash-backed path
    pub emmc_path: InfoString,
}

/// Memory and flash accounting.
///
/// Sizes are kilobytes (RAM) and megabytes (flash). For both, `used + free`
/// must equal the reported total.
pub trait MemoryStats {
    /// Total RAM in KiB.
    fn get_total_memory_size(&mut self, kib: Option<&mut u64>) -> HalResult;

    /// Used RAM in KiB.
    fn get_used_memory_size(&mut self, kib: Option<&mut u64>) -> HalResult;

    /// Free RAM in KiB.
    fn get_free_memory_size(&mut self, kib: Option<&mut u64>) -> HalResult;

    /// Total flash in MiB.
    fn get_flash_size(&mut self, mib: Option<&mut u64>) -> HalResult;

    /// Used flash in MiB.
    fn get_flash_used(&mut self, mib: Option<&mut u64>) -> HalResult;

    /// Free flash in MiB.
    fn get_flash_free(&mut self, mib: Option<&mut u64>) -> HalResult;

    /// Number of factory resets performed.
    fn get_factory_reset_count(&mut self, count: Option<&mut u32>) -> HalResult;

    /// Reset the factory reset counter to zero when `clear` is `true`.
    fn clear_reset_count(&mut self, clear: bool) -> HalResult;

    /// Offset from UTC in seconds, as decimal text (for example `"-18000"`).
    fn get_time_offset(&mut self, offset: Option<&mut InfoString>) -> HalResult;

    /// CPU clock as text, leading decimal MHz (for example `"1500"`).
    fn get_cpu_speed(&mut self, mhz: Option<&mut InfoString>) -> HalResult;

    /// Counters of the interface named `if_name`.
    fn get_interface_stats(&mut self, if_name: Option<&str>, stats: Option<&mut InterfaceStats>) -> HalResult;

    /// Memory paths of `cpu`. [`CpuKind::NotSupported`] is rejected.
    fn get_memory_paths(&mut self, cpu: CpuKind, info: Option<&mut ProcMemInfo>) -> HalResult;
}

/// Parse a [`MemoryStats::get_time_offset`] value and check it is in range.
pub fn parse_time_offset(text: &str) -> Option<i32> {
    let secs: i32 = text.trim().parse().ok()?;
    (-TIME_OFFSET_MAX_SECS..=TIME_OFFSET_MAX_SECS)
        .contains(&secs)
        .then_some(secs)
}

/// Leading decimal MHz of a [`MemoryStats::get_cpu_speed`] value.
pub fn parse_cpu_mhz(text: &str) -> Option<u32> {
    let digits = text
        .trim()
        .split(|c: char| !c.is_ascii_digit())
        .next()
        .filter(|d| !d.is_empty())?;
    digits.parse().ok().filter(|mhz| *mhz > 0)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_cpu_kind_from_code() {
        assert_eq!(CpuKind::try_from(0), Ok(CpuKind::Host));
        assert_eq!(CpuKind::try_from(2), Ok(CpuKind::NotSupported));
        assert_eq!(CpuKind::try_from(3), Err(HalError::InvalidArgument));
    }

    #[test]
    fn test_time_offset_bounds() {
        assert_eq!(parse_time_offset("-18000"), Some(-18_000));
        assert_eq!(parse_time_offset("0"), Some(0));
        assert_eq!(parse_time_offset("50401"), None);
        assert_eq!(parse_time_offset("+5:00"), None);
    }

    #[test]
    fn test_cpu_mhz_leading_digits() {
        assert_eq!(parse_cpu_mhz("1500"), Some(1500));
        assert_eq!(parse_cpu_mhz("1500 MHz"), Some(1500));
        assert_eq!(parse_cpu_mhz("MHz"), None);
        assert_eq!(parse_cpu_mhz("0"), None);
    }
}
