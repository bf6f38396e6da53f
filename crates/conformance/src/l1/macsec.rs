//! MACsec on the CPU-facing Ethernet ports
//!
//! Port indices come from `MaxEthPort`; the first index past the last port
//! is the invalid one. With no ports configured these tests have nothing
//! to exercise and pass.

use crate::registry::TableEntry;
use crate::{check, check_err, check_ok, TestContext, TestResult};

const START_TIMEOUT_SECS: i32 = 10;

pub(super) const TESTS: &[TableEntry] = crate::test_table![
    get_macsec_enable_positive,
    get_macsec_enable_negative,
    set_macsec_enable_positive,
    set_macsec_enable_invalid_port,
    get_macsec_operational_status_positive,
    get_macsec_operational_status_negative,
    start_macsec_positive,
    start_macsec_negative,
    stop_macsec_positive,
    stop_macsec_invalid_port,
];

fn has_ports(ctx: &TestContext<'_>) -> bool {
    if ctx.max_eth_port() == 0 {
        tracing::info!("MaxEthPort is 0, no Ethernet port to exercise");
        return false;
    }
    true
}

fn get_macsec_enable_positive(ctx: &mut TestContext<'_>) -> TestResult {
    if !has_ports(ctx) {
        return Ok(());
    }
    for port in ctx.config().eth_ports() {
        let mut enabled = false;
        check_ok!(ctx.hal().get_macsec_enable(port, Some(&mut enabled)));
    }
    Ok(())
}

fn get_macsec_enable_negative(ctx: &mut TestContext<'_>) -> TestResult {
    if !has_ports(ctx) {
        return Ok(());
    }
    let mut enabled = false;
    let invalid = ctx.max_eth_port();
    check_err!(ctx.hal().get_macsec_enable(0, None));
    check_err!(ctx.hal().get_macsec_enable(invalid, Some(&mut enabled)));
    Ok(())
}

fn set_macsec_enable_positive(ctx: &mut TestContext<'_>) -> TestResult {
    if !has_ports(ctx) {
        return Ok(());
    }
    for port in ctx.config().eth_ports() {
        for wanted in [true, false] {
            check_ok!(ctx.hal().set_macsec_enable(port, wanted));
            let mut read = !wanted;
            check_ok!(ctx.hal().get_macsec_enable(port, Some(&mut read)));
            check!(read == wanted, "port {port}: MACsec enable reads {read}, set {wanted}");
        }
    }
    Ok(())
}

fn set_macsec_enable_invalid_port(ctx: &mut TestContext<'_>) -> TestResult {
    if !has_ports(ctx) {
        return Ok(());
    }
    let invalid = ctx.max_eth_port();
    check_err!(ctx.hal().set_macsec_enable(invalid, true));
    Ok(())
}

fn get_macsec_operational_status_positive(ctx: &mut TestContext<'_>) -> TestResult {
    if !has_ports(ctx) {
        return Ok(());
    }
    for port in ctx.config().eth_ports() {
        let mut up = false;
        check_ok!(ctx.hal().set_macsec_enable(port, true));
        check_ok!(ctx.hal().start_macsec(port, START_TIMEOUT_SECS));
        check_ok!(ctx.hal().get_macsec_operational_status(port, Some(&mut up)));
        check!(up, "port {port}: MACsec not operational after start");

        check_ok!(ctx.hal().stop_macsec(port));
        check_ok!(ctx.hal().get_macsec_operational_status(port, Some(&mut up)));
        check!(!up, "port {port}: MACsec still operational after stop");
        check_ok!(ctx.hal().set_macsec_enable(port, false));
    }
    Ok(())
}

fn get_macsec_operational_status_negative(ctx: &mut TestContext<'_>) -> TestResult {
    if !has_ports(ctx) {
        return Ok(());
    }
    let mut up = false;
    let invalid = ctx.max_eth_port();
    check_err!(ctx.hal().get_macsec_operational_status(0, None));
    check_err!(ctx.hal().get_macsec_operational_status(invalid, Some(&mut up)));
    Ok(())
}

fn start_macsec_positive(ctx: &mut TestContext<'_>) -> TestResult {
    if !has_ports(ctx) {
        return Ok(());
    }
    for port in ctx.config().eth_ports() {
        check_ok!(ctx.hal().set_macsec_enable(port, true));
        check_ok!(ctx.hal().start_macsec(port, 0));
        check_ok!(ctx.hal().start_macsec(port, START_TIMEOUT_SECS));
        check_ok!(ctx.hal().stop_macsec(port));
        check_ok!(ctx.hal().set_macsec_enable(port, false));
    }
    Ok(())
}

fn start_macsec_negative(ctx: &mut TestContext<'_>) -> TestResult {
    if !has_ports(ctx) {
        return Ok(());
    }
    let invalid = ctx.max_eth_port();
    check_ok!(ctx.hal().set_macsec_enable(0, true));
    let negative_timeout = ctx.hal().start_macsec(0, -1);
    check_ok!(ctx.hal().set_macsec_enable(0, false));

    check_err!(negative_timeout);
    check_err!(ctx.hal().start_macsec(invalid, START_TIMEOUT_SECS));
    Ok(())
}

fn stop_macsec_positive(ctx: &mut TestContext<'_>) -> TestResult {
    if !has_ports(ctx) {
        return Ok(());
    }
    for port in ctx.config().eth_ports() {
        check_ok!(ctx.hal().stop_macsec(port));
    }
    Ok(())
}

fn stop_macsec_invalid_port(ctx: &mut TestContext<'_>) -> TestResult {
    if !has_ports(ctx) {
        return Ok(());
    }
    let invalid = ctx.max_eth_port();
    check_err!(ctx.hal().stop_macsec(invalid));
    Ok(())
}
