//! The shipped stub answers every call with RETURN_OK and never writes
//! through an output parameter, whatever it is given.

// Test file: unwrap/expect/panic acceptable in test code.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use platform_hal::*;

fn ok<T>(result: HalResult<T>) {
    assert_eq!(status_code(&result), RETURN_OK);
}

#[test]
fn stub_identity_getters_leave_buffers_untouched() {
    let mut hal = StubHal::new();
    let mut buf = InfoString::new();
    buf.push_str("sentinel").unwrap();

    ok(hal.get_model_name(Some(&mut buf)));
    ok(hal.get_serial_number(Some(&mut buf)));
    ok(hal.get_base_mac_address(Some(&mut buf)));
    ok(hal.get_router_region(Some(&mut buf)));
    assert_eq!(buf.as_str(), "sentinel");
}

#[test]
fn stub_accepts_null_and_out_of_range_arguments() {
    let mut hal = StubHal::new();

    ok(hal.get_serial_number(None));
    ok(hal.set_factory_cm_variant(None));
    ok(hal.set_snmp_enable(Some("not-a-mode")));
    ok(hal.set_web_ui_timeout(u32::MAX));
    ok(hal.set_web_access_level(99, 99, u32::MAX));
    ok(hal.set_device_code_image_timeout(-1));
    ok(hal.get_interface_stats(None, None));
    ok(hal.get_memory_paths(CpuKind::NotSupported, None));
    ok(hal.set_led(Some(&LedParams::solid(LedColor::NotSupported))));
    ok(hal.set_fan_speed(u32::MAX, FanSpeed::Max, None));
    ok(hal.start_macsec(u32::MAX, -5));
    ok(hal.get_dhcpv4_options(None, None));
    ok(hal.set_dscp(WanInterface::Docsis, TrafficCountCommand::Start, Some("99,99")));
    ok(hal.set_low_power_mode_state(None));
    ok(hal.get_firmware_bank_info(FwBank::Inactive, None));
}

#[test]
fn stub_raw_value_getters_return_zero() {
    let mut hal = StubHal::new();
    assert_eq!(hal.get_fan_speed(0), 0);
    assert_eq!(hal.get_rpm(0), 0);
    assert_eq!(hal.get_rotor_lock(0), 0);
    assert!(!hal.get_fan_status(0));
}

#[test]
fn stub_list_outputs_stay_empty() {
    let mut hal = StubHal::new();
    let mut requested = DhcpOptionList::new();
    let mut sent = DhcpOptionList::new();
    ok(hal.get_dhcpv6_options(Some(&mut requested), Some(&mut sent)));
    assert!(requested.is_empty() && sent.is_empty());

    let mut clients = DscpClientList::new();
    ok(hal.get_dscp_client_list(WanInterface::Ewan, Some(&mut clients)));
    assert!(clients.is_empty());
}

#[test]
fn stub_is_usable_as_trait_object() {
    let mut stub = StubHal::new();
    let hal: &mut dyn PlatformHal = &mut stub;
    ok(hal.pandm_db_init());
    ok(hal.docsis_params_db_init());
    ok(hal.clear_reset_count(true));
}
