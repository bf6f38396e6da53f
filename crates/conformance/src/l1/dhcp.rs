//! DHCP client option lists

use platform_hal::dhcp::{is_well_formed, DHCPV4_TAG_MAX};
use platform_hal::DhcpOptionList;

use crate::registry::TableEntry;
use crate::{check, check_err, check_ok, TestContext, TestResult};

pub(super) const TESTS: &[TableEntry] = crate::test_table![
    get_dhcpv4_options_positive,
    get_dhcpv4_options_null,
    get_dhcpv6_options_positive,
    get_dhcpv6_options_null,
];

fn get_dhcpv4_options_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let (mut requested, mut sent) = (DhcpOptionList::new(), DhcpOptionList::new());
    check_ok!(ctx.hal().get_dhcpv4_options(Some(&mut requested), Some(&mut sent)));
    check!(
        is_well_formed(&requested, DHCPV4_TAG_MAX),
        "malformed requested DHCPv4 options {requested:?}"
    );
    check!(is_well_formed(&sent, DHCPV4_TAG_MAX), "malformed sent DHCPv4 options {sent:?}");
    Ok(())
}

fn get_dhcpv4_options_null(ctx: &mut TestContext<'_>) -> TestResult {
    let mut list = DhcpOptionList::new();
    check_err!(ctx.hal().get_dhcpv4_options(None, Some(&mut list)));
    check_err!(ctx.hal().get_dhcpv4_options(Some(&mut list), None));
    check_err!(ctx.hal().get_dhcpv4_options(None, None));
    Ok(())
}

fn get_dhcpv6_options_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let (mut requested, mut sent) = (DhcpOptionList::new(), DhcpOptionList::new());
    check_ok!(ctx.hal().get_dhcpv6_options(Some(&mut requested), Some(&mut sent)));
    check!(
        is_well_formed(&requested, u16::MAX),
        "malformed requested DHCPv6 options {requested:?}"
    );
    check!(is_well_formed(&sent, u16::MAX), "malformed sent DHCPv6 options {sent:?}");
    Ok(())
}

fn get_dhcpv6_options_null(ctx: &mut TestContext<'_>) -> TestResult {
    let mut list = DhcpOptionList::new();
    check_err!(ctx.hal().get_dhcpv6_options(None, Some(&mut list)));
    check_err!(ctx.hal().get_dhcpv6_options(Some(&mut list), None));
    check_err!(ctx.hal().get_dhcpv6_options(None, None));
    Ok(())
}
