//! DSCP traffic counting

use platform_hal::{DscpClientList, DscpSet, TrafficCountCommand, WanInterface};

use crate::registry::TableEntry;
use crate::{check, check_err, check_ok, fail, TestContext, TestResult};

const COUNTED: &str = "0,10,46";

pub(super) const TESTS: &[TableEntry] = crate::test_table![
    set_dscp_positive,
    set_dscp_negative,
    get_dscp_client_list_positive,
    get_dscp_client_list_null,
];

fn set_dscp_positive(ctx: &mut TestContext<'_>) -> TestResult {
    for interface in WanInterface::ALL {
        check_ok!(ctx.hal().set_dscp(interface, TrafficCountCommand::Start, Some(COUNTED)));
        check_ok!(ctx.hal().set_dscp(interface, TrafficCountCommand::Stop, None));
    }
    Ok(())
}

fn set_dscp_negative(ctx: &mut TestContext<'_>) -> TestResult {
    let start = TrafficCountCommand::Start;
    check_err!(ctx.hal().set_dscp(WanInterface::Docsis, start, None));
    check_err!(ctx.hal().set_dscp(WanInterface::Docsis, start, Some("")));
    check_err!(ctx.hal().set_dscp(WanInterface::Docsis, start, Some("64")));
    check_err!(ctx.hal().set_dscp(WanInterface::Docsis, start, Some("10,10")));
    check_err!(ctx.hal().set_dscp(WanInterface::Ewan, start, Some("ef")));
    Ok(())
}

fn get_dscp_client_list_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let counted = match DscpSet::parse(COUNTED) {
        Ok(set) => set,
        Err(err) => fail!("{COUNTED:?} does not parse: {err}"),
    };
    let interface = WanInterface::Docsis;
    check_ok!(ctx.hal().set_dscp(interface, TrafficCountCommand::Start, Some(COUNTED)));

    let mut clients = DscpClientList::new();
    let listed = ctx.hal().get_dscp_client_list(interface, Some(&mut clients));
    check_ok!(ctx.hal().set_dscp(interface, TrafficCountCommand::Stop, None));
    check_ok!(listed);

    for client in &clients {
        check!(
            !client.mac.is_zero() && !client.mac.is_multicast(),
            "client MAC {} is not a unicast address",
            client.mac
        );
        for count in &client.counts {
            check!(
                counted.contains(count.dscp),
                "client {}: counters for code point {} which is not counted",
                client.mac,
                count.dscp
            );
        }
    }
    Ok(())
}

fn get_dscp_client_list_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_dscp_client_list(WanInterface::Docsis, None));
    Ok(())
}
