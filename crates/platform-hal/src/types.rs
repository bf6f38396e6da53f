//! Value types shared across subsystems

use crate::status::{HalError, HalResult};

/// Capacity of a string output buffer, matching the C contract's `CHAR[128]`.
pub const INFO_STRING_LEN: usize = 128;

/// Caller-allocated string output buffer.
pub type InfoString = heapless::String<INFO_STRING_LEN>;

/// Replace the contents of `dst` with `src`.
///
/// Fails with [`HalError::InvalidArgument`] when `src` does not fit; `dst`
/// is left empty in that case.
pub fn fill<const N: usize>(dst: &mut heapless::String<N>, src: &str) -> HalResult {
    dst.clear();
    dst.push_str(src).map_err(|_| HalError::InvalidArgument)
}

/// 48-bit MAC address.
///
/// The HAL exchanges MAC addresses as colon-separated hex text
/// (`aa:bb:cc:dd:ee:ff`, 17 characters).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct MacAddress([u8; 6]);

impl MacAddress {
    /// Length of the textual form.
    pub const TEXT_LEN: usize = 17;

    /// Create from raw octets.
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    /// Parse `xx:xx:xx:xx:xx:xx` (either hex case).
    pub fn parse(text: &str) -> Option<Self> {
        if text.len() != Self::TEXT_LEN {
            return None;
        }
        let mut octets = [0u8; 6];
        let mut parts = text.split(':');
        for octet in &mut octets {
            let part = parts.next()?;
            if part.len() != 2 || !part.bytes().all(|b| b.is_ascii_hexdigit()) {
                return None;
            }
            *octet = u8::from_str_radix(part, 16).ok()?;
        }
        if parts.next().is_some() {
            return None;
        }
        Some(Self(octets))
    }

    /// Raw octets.
    pub const fn octets(&self) -> [u8; 6] {
        self.0
    }

    /// All-zero address, never valid as a device address.
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 6]
    }

    /// Group (multicast/broadcast) bit set.
    pub fn is_multicast(&self) -> bool {
        self.0.first().is_some_and(|b| b & 0x01 != 0)
    }
}

impl core::fmt::Display for MacAddress {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use core::fmt::Write as _;

    #[test]
    fn test_mac_parse_valid() {
        let mac = MacAddress::parse("00:1A:2b:3c:4D:5e").unwrap();
        assert_eq!(mac.octets(), [0x00, 0x1a, 0x2b, 0x3c, 0x4d, 0x5e]);
        assert!(!mac.is_zero());
        assert!(!mac.is_multicast());
    }

    #[test]
    fn test_mac_parse_rejects_malformed() {
        assert!(MacAddress::parse("").is_none());
        assert!(MacAddress::parse("00:1a:2b:3c:4d").is_none());
        assert!(MacAddress::parse("00-1a-2b-3c-4d-5e").is_none());
        assert!(MacAddress::parse("00:1a:2b:3c:4d:5g").is_none());
        assert!(MacAddress::parse("+0:1a:2b:3c:4d:5e").is_none());
        assert!(MacAddress::parse("001:a:2b:3c:4d:5e").is_none());
    }

    #[test]
    fn test_mac_display_is_lower_hex() {
        let mut text = heapless::String::<32>::new();
        write!(text, "{}", MacAddress::new([0xAA, 0xBB, 0, 1, 2, 0xFF])).unwrap();
        assert_eq!(text.as_str(), "aa:bb:00:01:02:ff");
    }

    #[test]
    fn test_fill_overflow_leaves_empty() {
        let mut small = heapless::String::<4>::new();
        assert!(fill(&mut small, "abcd").is_ok());
        assert_eq!(small.as_str(), "abcd");
        assert_eq!(fill(&mut small, "abcde"), Err(HalError::InvalidArgument));
        assert!(small.is_empty());
    }
}
