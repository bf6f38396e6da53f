//! Level 2: cross-function tests
//!
//! Each test drives several HAL operations and checks they agree with one
//! another: get/set/get round trips, counters that must add up, and values
//! reported by two subsystems that must match. The suite setup brings the
//! parameter databases up once before the first test.

use platform_hal::device::FACTORY_CM_VARIANTS;
use platform_hal::services::{SNMP_MODES, WEB_ACCESS_INTERFACES, WEB_ACCESS_LEVEL_MAX, WEB_ACCESS_USERS};
use platform_hal::{DscpClientList, FwBank, FwBankInfo, InfoString, InterfaceStats, TrafficCountCommand, WanInterface};

use crate::l1::WAN_INTERFACE;
use crate::registry::{Registry, RegistrationError, TableEntry};
use crate::{check, check_eq, check_ok, TestContext, TestResult};

/// Suite name.
pub const SUITE_NAME: &str = "L2 platform_hal";

/// The L2 tests in registration order.
pub const TESTS: &[TableEntry] = crate::test_table![
    factory_cm_variant_round_trip,
    snmp_mode_round_trip,
    remote_access_round_trip,
    web_access_level_round_trip,
    memory_accounting_consistent,
    factory_reset_count_clears,
    interface_stats_monotonic,
    macsec_lifecycle,
    dscp_counting_lifecycle,
    active_bank_matches_firmware_name,
];

/// Initialise the PandM and DOCSIS parameter databases.
pub fn setup(ctx: &mut TestContext<'_>) -> TestResult {
    check_ok!(ctx.hal().pandm_db_init());
    check_ok!(ctx.hal().docsis_params_db_init());
    Ok(())
}

/// Create the L2 suite with [`setup`] and register [`TESTS`].
///
/// Returns the number of registered tests.
pub fn register(registry: &mut Registry) -> Result<usize, RegistrationError> {
    let suite = registry.add_suite(SUITE_NAME, Some(setup))?;
    for entry in TESTS {
        registry.add_test(suite, entry.name, entry.body)?;
    }
    tracing::info!(suite = SUITE_NAME, tests = TESTS.len(), "suite registered");
    Ok(TESTS.len())
}

fn factory_cm_variant_round_trip(ctx: &mut TestContext<'_>) -> TestResult {
    let mut original = InfoString::new();
    check_ok!(ctx.hal().get_factory_cm_variant(Some(&mut original)));

    let Some(&other) = FACTORY_CM_VARIANTS.iter().find(|v| **v != original.as_str()) else {
        return Ok(());
    };
    check_ok!(ctx.hal().set_factory_cm_variant(Some(other)));
    let mut read = InfoString::new();
    check_ok!(ctx.hal().get_factory_cm_variant(Some(&mut read)));
    check_eq!(read.as_str(), other);

    check_ok!(ctx.hal().set_factory_cm_variant(Some(original.as_str())));
    check_ok!(ctx.hal().get_factory_cm_variant(Some(&mut read)));
    check_eq!(read, original);
    Ok(())
}

fn snmp_mode_round_trip(ctx: &mut TestContext<'_>) -> TestResult {
    let mut original = InfoString::new();
    check_ok!(ctx.hal().get_snmp_enable(Some(&mut original)));

    let Some(&other) = SNMP_MODES.iter().find(|m| **m != original.as_str()) else {
        return Ok(());
    };
    check_ok!(ctx.hal().set_snmp_enable(Some(other)));
    let mut read = InfoString::new();
    check_ok!(ctx.hal().get_snmp_enable(Some(&mut read)));
    check_eq!(read.as_str(), other);

    check_ok!(ctx.hal().set_snmp_enable(Some(original.as_str())));
    check_ok!(ctx.hal().get_snmp_enable(Some(&mut read)));
    check_eq!(read, original);
    Ok(())
}

fn remote_access_round_trip(ctx: &mut TestContext<'_>) -> TestResult {
    let (mut telnet, mut ssh) = (false, false);
    check_ok!(ctx.hal().get_telnet_enable(Some(&mut telnet)));
    check_ok!(ctx.hal().get_ssh_enable(Some(&mut ssh)));

    // Toggling one service must not move the other.
    check_ok!(ctx.hal().set_telnet_enable(!telnet));
    let mut read = !ssh;
    check_ok!(ctx.hal().get_ssh_enable(Some(&mut read)));
    check_eq!(read, ssh);

    check_ok!(ctx.hal().set_ssh_enable(!ssh));
    let mut read = telnet;
    check_ok!(ctx.hal().get_telnet_enable(Some(&mut read)));
    check_eq!(read, !telnet);

    check_ok!(ctx.hal().set_telnet_enable(telnet));
    check_ok!(ctx.hal().set_ssh_enable(ssh));
    Ok(())
}

fn web_access_level_round_trip(ctx: &mut TestContext<'_>) -> TestResult {
    let mut slots = Vec::new();
    for &user in WEB_ACCESS_USERS {
        for &interface in WEB_ACCESS_INTERFACES {
            let mut level = 0;
            check_ok!(ctx.hal().get_web_access_level(user, interface, Some(&mut level)));
            slots.push((user, interface, level));
        }
    }

    // Write a distinct level to every slot, then make sure none bled into another.
    let levels = 0..=WEB_ACCESS_LEVEL_MAX;
    for (n, &(user, interface, _)) in levels.clone().zip(&slots) {
        check_ok!(ctx.hal().set_web_access_level(user, interface, n));
    }
    for (n, &(user, interface, _)) in levels.zip(&slots) {
        let mut level = u32::MAX;
        check_ok!(ctx.hal().get_web_access_level(user, interface, Some(&mut level)));
        check_eq!(level, n);
    }

    for &(user, interface, level) in &slots {
        check_ok!(ctx.hal().set_web_access_level(user, interface, level));
    }
    Ok(())
}

fn memory_accounting_consistent(ctx: &mut TestContext<'_>) -> TestResult {
    let (mut total, mut used, mut free) = (0u64, 0u64, 0u64);
    check_ok!(ctx.hal().get_total_memory_size(Some(&mut total)));
    check_ok!(ctx.hal().get_used_memory_size(Some(&mut used)));
    check_ok!(ctx.hal().get_free_memory_size(Some(&mut free)));
    check!(total > 0, "total memory is zero");
    check_eq!(used.checked_add(free), Some(total));

    let (mut flash, mut flash_used, mut flash_free) = (0u64, 0u64, 0u64);
    check_ok!(ctx.hal().get_flash_size(Some(&mut flash)));
    check_ok!(ctx.hal().get_flash_used(Some(&mut flash_used)));
    check_ok!(ctx.hal().get_flash_free(Some(&mut flash_free)));
    check!(flash > 0, "flash size is zero");
    check_eq!(flash_used.checked_add(flash_free), Some(flash));
    Ok(())
}

fn factory_reset_count_clears(ctx: &mut TestContext<'_>) -> TestResult {
    let mut before = 0;
    check_ok!(ctx.hal().get_factory_reset_count(Some(&mut before)));

    check_ok!(ctx.hal().clear_reset_count(false));
    let mut after = u32::MAX;
    check_ok!(ctx.hal().get_factory_reset_count(Some(&mut after)));
    check_eq!(after, before);

    check_ok!(ctx.hal().clear_reset_count(true));
    check_ok!(ctx.hal().get_factory_reset_count(Some(&mut after)));
    check_eq!(after, 0);
    Ok(())
}

fn interface_stats_monotonic(ctx: &mut TestContext<'_>) -> TestResult {
    let (mut first, mut second) = (InterfaceStats::default(), InterfaceStats::default());
    check_ok!(ctx.hal().get_interface_stats(Some(WAN_INTERFACE), Some(&mut first)));
    check_ok!(ctx.hal().get_interface_stats(Some(WAN_INTERFACE), Some(&mut second)));
    check!(
        second.rx_bytes >= first.rx_bytes
            && second.tx_bytes >= first.tx_bytes
            && second.rx_packets >= first.rx_packets
            && second.tx_packets >= first.tx_packets,
        "{WAN_INTERFACE}: counters went backwards: {first:?} then {second:?}"
    );
    Ok(())
}

fn macsec_lifecycle(ctx: &mut TestContext<'_>) -> TestResult {
    if ctx.max_eth_port() == 0 {
        tracing::info!("MaxEthPort is 0, no Ethernet port to exercise");
        return Ok(());
    }
    for port in ctx.config().eth_ports() {
        let (mut enabled, mut up) = (false, true);
        check_ok!(ctx.hal().set_macsec_enable(port, true));
        check_ok!(ctx.hal().get_macsec_enable(port, Some(&mut enabled)));
        check!(enabled, "port {port}: MACsec not enabled after enable");

        check_ok!(ctx.hal().start_macsec(port, 10));
        check_ok!(ctx.hal().get_macsec_operational_status(port, Some(&mut up)));
        check!(up, "port {port}: MACsec not operational after start");

        // Disabling a running port takes it down.
        check_ok!(ctx.hal().set_macsec_enable(port, false));
        check_ok!(ctx.hal().get_macsec_operational_status(port, Some(&mut up)));
        check!(!up, "port {port}: MACsec operational while disabled");
        check_ok!(ctx.hal().stop_macsec(port));
    }
    Ok(())
}

fn dscp_counting_lifecycle(ctx: &mut TestContext<'_>) -> TestResult {
    for interface in WanInterface::ALL {
        let mut clients = DscpClientList::new();
        check_ok!(ctx.hal().set_dscp(interface, TrafficCountCommand::Start, Some("46")));
        check_ok!(ctx.hal().get_dscp_client_list(interface, Some(&mut clients)));
        for client in &clients {
            check!(
                client.counts.iter().all(|c| c.dscp == 46),
                "{interface:?}: client {} has counters outside the counted set",
                client.mac
            );
        }

        check_ok!(ctx.hal().set_dscp(interface, TrafficCountCommand::Stop, None));
        check_ok!(ctx.hal().get_dscp_client_list(interface, Some(&mut clients)));
        check!(
            clients.iter().all(|c| c.counts.is_empty()),
            "{interface:?}: counters still reported after stop"
        );
    }
    Ok(())
}

fn active_bank_matches_firmware_name(ctx: &mut TestContext<'_>) -> TestResult {
    let mut name = InfoString::new();
    let mut active = FwBankInfo::default();
    check_ok!(ctx.hal().get_firmware_name(Some(&mut name)));
    check_ok!(ctx.hal().get_firmware_bank_info(FwBank::Active, Some(&mut active)));
    check_eq!(active.image_name, name);
    Ok(())
}
