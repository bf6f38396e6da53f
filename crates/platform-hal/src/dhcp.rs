//! DHCP option lists
//!
//! The C contract hands back heap-allocated linked lists that the caller must
//! free; here the caller owns fixed-capacity vectors that the HAL fills.

use crate::status::HalResult;

/// Longest option value (bytes of text).
pub const DHCP_OPTION_VALUE_LEN: usize = 64;

/// Most options per list.
pub const MAX_DHCP_OPTIONS: usize = 16;

/// Highest DHCPv4 option tag that carries data (255 is END).
pub const DHCPV4_TAG_MAX: u16 = 254;

/// One DHCP option.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DhcpOption {
    /// Option code. `0` (PAD) never appears in a list.
    pub tag: u16,
    /// Option payload as text
    pub value: heapless::String<DHCP_OPTION_VALUE_LEN>,
}

impl DhcpOption {
    /// Build an option; `None` when `value` does not fit.
    pub fn new(tag: u16, value: &str) -> Option<Self> {
        let mut text = heapless::String::new();
        text.push_str(value).ok()?;
        Some(Self { tag, value: text })
    }
}

/// Caller-owned option list.
pub type DhcpOptionList = heapless::Vec<DhcpOption, MAX_DHCP_OPTIONS>;

/// Returns `true` when every tag is non-zero, within `max_tag` and unique.
pub fn is_well_formed(list: &DhcpOptionList, max_tag: u16) -> bool {
    list.iter().enumerate().all(|(i, opt)| {
        opt.tag != 0
            && opt.tag <= max_tag
            && list.iter().skip(i.saturating_add(1)).all(|other| other.tag != opt.tag)
    })
}

/// DHCP client option lists.
pub trait DhcpOptions {
    /// DHCPv4 options the client requests and the options it sends.
    ///
    /// Both lists are cleared, then filled. Either being `None` is an error.
    fn get_dhcpv4_options(
        &mut self,
        requested: Option<&mut DhcpOptionList>,
        sent: Option<&mut DhcpOptionList>,
    ) -> HalResult;

    /// DHCPv6 options the client requests and the options it sends.
    fn get_dhcpv6_options(
        &mut self,
        requested: Option<&mut DhcpOptionList>,
        sent: Option<&mut DhcpOptionList>,
    ) -> HalResult;
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_rejects_duplicates_and_pad() {
        let mut list = DhcpOptionList::new();
        list.push(DhcpOption::new(43, "vendor").unwrap()).unwrap();
        list.push(DhcpOption::new(60, "dslforum.org").unwrap()).unwrap();
        assert!(is_well_formed(&list, DHCPV4_TAG_MAX));

        list.push(DhcpOption::new(43, "again").unwrap()).unwrap();
        assert!(!is_well_formed(&list, DHCPV4_TAG_MAX));

        let mut pad = DhcpOptionList::new();
        pad.push(DhcpOption::new(0, "").unwrap()).unwrap();
        assert!(!is_well_formed(&pad, DHCPV4_TAG_MAX));
    }

    #[test]
    fn test_option_value_capacity() {
        let long = "x".repeat(DHCP_OPTION_VALUE_LEN + 1);
        assert!(DhcpOption::new(1, &long).is_none());
    }
}
