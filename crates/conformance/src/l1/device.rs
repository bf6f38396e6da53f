//! Device identity

use platform_hal::device::{DEVICE_CONFIG_STATUSES, FACTORY_CM_VARIANTS, ROUTER_REGIONS};
use platform_hal::{InfoString, MacAddress};

use crate::registry::TableEntry;
use crate::{check, check_eq, check_err, check_ok, fail, TestContext, TestResult};

pub(super) const TESTS: &[TableEntry] = crate::test_table![
    pandm_db_init_positive,
    docsis_params_db_init_positive,
    get_device_config_status_positive,
    get_device_config_status_null,
    get_model_name_positive,
    get_model_name_null,
    get_serial_number_positive,
    get_serial_number_null,
    get_hardware_version_positive,
    get_hardware_version_null,
    get_software_version_positive,
    get_software_version_null,
    get_bootloader_version_positive,
    get_bootloader_version_null,
    get_firmware_name_positive,
    get_firmware_name_null,
    get_base_mac_address_positive,
    get_base_mac_address_null,
    get_router_region_positive,
    get_router_region_null,
    get_factory_partner_id_positive,
    get_factory_partner_id_null,
    get_factory_cm_variant_positive,
    get_factory_cm_variant_null,
    set_factory_cm_variant_positive,
    set_factory_cm_variant_negative,
];

fn pandm_db_init_positive(ctx: &mut TestContext<'_>) -> TestResult {
    check_ok!(ctx.hal().pandm_db_init());
    Ok(())
}

fn docsis_params_db_init_positive(ctx: &mut TestContext<'_>) -> TestResult {
    check_ok!(ctx.hal().docsis_params_db_init());
    Ok(())
}

fn get_device_config_status_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut status = InfoString::new();
    check_ok!(ctx.hal().get_device_config_status(Some(&mut status)));
    check!(
        DEVICE_CONFIG_STATUSES.contains(&status.as_str()),
        "unexpected config status {status:?}"
    );
    Ok(())
}

fn get_device_config_status_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_device_config_status(None));
    Ok(())
}

fn get_model_name_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut name = InfoString::new();
    check_ok!(ctx.hal().get_model_name(Some(&mut name)));
    check!(!name.is_empty(), "model name is empty");
    Ok(())
}

fn get_model_name_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_model_name(None));
    Ok(())
}

fn get_serial_number_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut serial = InfoString::new();
    check_ok!(ctx.hal().get_serial_number(Some(&mut serial)));
    check!(!serial.is_empty(), "serial number is empty");
    check!(
        serial.bytes().all(|b| b.is_ascii_graphic()),
        "serial number {serial:?} has non-printable characters"
    );
    Ok(())
}

fn get_serial_number_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_serial_number(None));
    Ok(())
}

fn get_hardware_version_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut version = InfoString::new();
    check_ok!(ctx.hal().get_hardware_version(Some(&mut version)));
    check!(!version.is_empty(), "hardware version is empty");
    Ok(())
}

fn get_hardware_version_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_hardware_version(None));
    Ok(())
}

fn get_software_version_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut version = InfoString::new();
    check_ok!(ctx.hal().get_software_version(Some(&mut version)));
    check!(!version.is_empty(), "software version is empty");
    Ok(())
}

fn get_software_version_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_software_version(None));
    Ok(())
}

fn get_bootloader_version_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut version = InfoString::new();
    check_ok!(ctx.hal().get_bootloader_version(Some(&mut version)));
    check!(!version.is_empty(), "bootloader version is empty");
    Ok(())
}

fn get_bootloader_version_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_bootloader_version(None));
    Ok(())
}

fn get_firmware_name_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut name = InfoString::new();
    check_ok!(ctx.hal().get_firmware_name(Some(&mut name)));
    check!(!name.is_empty(), "firmware name is empty");
    Ok(())
}

fn get_firmware_name_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_firmware_name(None));
    Ok(())
}

fn get_base_mac_address_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut text = InfoString::new();
    check_ok!(ctx.hal().get_base_mac_address(Some(&mut text)));
    check_eq!(text.len(), MacAddress::TEXT_LEN);
    let Some(mac) = MacAddress::parse(&text) else {
        fail!("{text:?} is not a colon-separated MAC address");
    };
    check!(!mac.is_zero(), "base MAC is all zeros");
    check!(!mac.is_multicast(), "base MAC {mac} is a multicast address");
    Ok(())
}

fn get_base_mac_address_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_base_mac_address(None));
    Ok(())
}

fn get_router_region_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut region = InfoString::new();
    check_ok!(ctx.hal().get_router_region(Some(&mut region)));
    check!(ROUTER_REGIONS.contains(&region.as_str()), "unexpected region {region:?}");
    Ok(())
}

fn get_router_region_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_router_region(None));
    Ok(())
}

fn get_factory_partner_id_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut partner = InfoString::new();
    check_ok!(ctx.hal().get_factory_partner_id(Some(&mut partner)));
    check!(!partner.is_empty(), "factory partner id is empty");
    Ok(())
}

fn get_factory_partner_id_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_factory_partner_id(None));
    Ok(())
}

fn get_factory_cm_variant_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut variant = InfoString::new();
    check_ok!(ctx.hal().get_factory_cm_variant(Some(&mut variant)));
    check!(
        FACTORY_CM_VARIANTS.contains(&variant.as_str()),
        "unexpected CM variant {variant:?}"
    );
    Ok(())
}

fn get_factory_cm_variant_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_factory_cm_variant(None));
    Ok(())
}

fn set_factory_cm_variant_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut original = InfoString::new();
    check_ok!(ctx.hal().get_factory_cm_variant(Some(&mut original)));

    for &variant in FACTORY_CM_VARIANTS {
        check_ok!(ctx.hal().set_factory_cm_variant(Some(variant)));
        let mut read = InfoString::new();
        check_ok!(ctx.hal().get_factory_cm_variant(Some(&mut read)));
        check_eq!(read.as_str(), variant);
    }

    if FACTORY_CM_VARIANTS.contains(&original.as_str()) {
        check_ok!(ctx.hal().set_factory_cm_variant(Some(original.as_str())));
    }
    Ok(())
}

fn set_factory_cm_variant_negative(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().set_factory_cm_variant(None));
    check_err!(ctx.hal().set_factory_cm_variant(Some("")));
    check_err!(ctx.hal().set_factory_cm_variant(Some("pc99")));
    Ok(())
}
