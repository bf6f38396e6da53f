//! Property-based tests for HAL value types.
//! Verifies parsers accept every well-formed input and reject the rest.

use platform_hal::dscp::{DscpSet, DSCP_MAX};
use platform_hal::memory::{parse_time_offset, TIME_OFFSET_MAX_SECS};
use platform_hal::MacAddress;

proptest::proptest! {
    /// Display then parse yields the same MAC for every address.
    #[test]
    fn mac_display_parses_back(octets in proptest::array::uniform6(0u8..=255u8)) {
        let mac = MacAddress::new(octets);
        let text = mac.to_string();
        assert_eq!(text.len(), MacAddress::TEXT_LEN);
        assert_eq!(MacAddress::parse(&text), Some(mac));
        assert_eq!(MacAddress::parse(&text.to_uppercase()), Some(mac));
    }

    /// MacAddress::parse never panics on arbitrary text.
    #[test]
    fn mac_parse_never_panics(text in ".{0,24}") {
        let _ = MacAddress::parse(&text);
    }

    /// Any set of distinct in-range code points parses, in order.
    #[test]
    fn dscp_distinct_values_parse(values in proptest::collection::btree_set(0u8..=DSCP_MAX, 1..20)) {
        let list: Vec<u8> = values.into_iter().collect();
        let text = list.iter().map(u8::to_string).collect::<Vec<_>>().join(",");
        let set = DscpSet::parse(&text).unwrap_or_default();
        assert_eq!(set.values(), list.as_slice());
    }

    /// A code point above 63 anywhere in the list rejects the whole list.
    #[test]
    fn dscp_out_of_range_rejected(good in 0u8..=DSCP_MAX, bad in (DSCP_MAX + 1)..=255u8) {
        assert!(DscpSet::parse(&format!("{good},{bad}")).is_err());
        assert!(DscpSet::parse(&format!("{bad}")).is_err());
    }

    /// Time offsets inside ±14 h parse, everything outside is rejected.
    #[test]
    fn time_offset_bounds(secs in i32::MIN..=i32::MAX) {
        let parsed = parse_time_offset(&secs.to_string());
        if (-TIME_OFFSET_MAX_SECS..=TIME_OFFSET_MAX_SECS).contains(&secs) {
            assert_eq!(parsed, Some(secs));
        } else {
            assert_eq!(parsed, None);
        }
    }
}
