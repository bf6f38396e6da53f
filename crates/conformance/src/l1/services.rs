//! Remote management services and web UI

use platform_hal::services::{
    is_valid_web_ui_timeout, DCI_TIMEOUT_MAX, SNMP_MODES, SNMP_ONBOARD_REBOOT_VALUES, WEB_ACCESS_INTERFACES,
    WEB_ACCESS_LEVEL_MAX, WEB_ACCESS_USERS, WEB_UI_TIMEOUT_DISABLED, WEB_UI_TIMEOUT_MAX, WEB_UI_TIMEOUT_MIN,
};
use platform_hal::InfoString;

use crate::registry::TableEntry;
use crate::{check, check_eq, check_err, check_ok, TestContext, TestResult};

pub(super) const TESTS: &[TableEntry] = crate::test_table![
    get_telnet_enable_positive,
    get_telnet_enable_null,
    set_telnet_enable_positive,
    get_ssh_enable_positive,
    get_ssh_enable_null,
    set_ssh_enable_positive,
    get_snmp_enable_positive,
    get_snmp_enable_null,
    set_snmp_enable_positive,
    set_snmp_enable_negative,
    get_web_ui_timeout_positive,
    get_web_ui_timeout_null,
    set_web_ui_timeout_positive,
    set_web_ui_timeout_negative,
    get_web_access_level_positive,
    get_web_access_level_negative,
    set_web_access_level_positive,
    set_web_access_level_negative,
    set_snmp_onboard_reboot_enable_positive,
    set_snmp_onboard_reboot_enable_negative,
    set_device_code_image_timeout_positive,
    set_device_code_image_timeout_negative,
    set_device_code_image_valid_positive,
];

fn get_telnet_enable_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut enabled = false;
    check_ok!(ctx.hal().get_telnet_enable(Some(&mut enabled)));
    Ok(())
}

fn get_telnet_enable_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_telnet_enable(None));
    Ok(())
}

fn set_telnet_enable_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut original = false;
    check_ok!(ctx.hal().get_telnet_enable(Some(&mut original)));

    for wanted in [!original, original] {
        check_ok!(ctx.hal().set_telnet_enable(wanted));
        let mut read = !wanted;
        check_ok!(ctx.hal().get_telnet_enable(Some(&mut read)));
        check_eq!(read, wanted);
    }
    Ok(())
}

fn get_ssh_enable_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut enabled = false;
    check_ok!(ctx.hal().get_ssh_enable(Some(&mut enabled)));
    Ok(())
}

fn get_ssh_enable_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_ssh_enable(None));
    Ok(())
}

fn set_ssh_enable_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut original = false;
    check_ok!(ctx.hal().get_ssh_enable(Some(&mut original)));

    for wanted in [!original, original] {
        check_ok!(ctx.hal().set_ssh_enable(wanted));
        let mut read = !wanted;
        check_ok!(ctx.hal().get_ssh_enable(Some(&mut read)));
        check_eq!(read, wanted);
    }
    Ok(())
}

fn get_snmp_enable_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut mode = InfoString::new();
    check_ok!(ctx.hal().get_snmp_enable(Some(&mut mode)));
    check!(SNMP_MODES.contains(&mode.as_str()), "unexpected SNMP mode {mode:?}");
    Ok(())
}

fn get_snmp_enable_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_snmp_enable(None));
    Ok(())
}

fn set_snmp_enable_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut original = InfoString::new();
    check_ok!(ctx.hal().get_snmp_enable(Some(&mut original)));

    for &mode in SNMP_MODES {
        check_ok!(ctx.hal().set_snmp_enable(Some(mode)));
        let mut read = InfoString::new();
        check_ok!(ctx.hal().get_snmp_enable(Some(&mut read)));
        check_eq!(read.as_str(), mode);
    }

    if SNMP_MODES.contains(&original.as_str()) {
        check_ok!(ctx.hal().set_snmp_enable(Some(original.as_str())));
    }
    Ok(())
}

fn set_snmp_enable_negative(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().set_snmp_enable(None));
    check_err!(ctx.hal().set_snmp_enable(Some("")));
    check_err!(ctx.hal().set_snmp_enable(Some("rgBridge")));
    Ok(())
}

fn get_web_ui_timeout_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut secs = u32::MAX;
    check_ok!(ctx.hal().get_web_ui_timeout(Some(&mut secs)));
    check!(is_valid_web_ui_timeout(secs), "web UI timeout {secs}s out of range");
    Ok(())
}

fn get_web_ui_timeout_null(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().get_web_ui_timeout(None));
    Ok(())
}

fn set_web_ui_timeout_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let mut original = 0;
    check_ok!(ctx.hal().get_web_ui_timeout(Some(&mut original)));

    for secs in [WEB_UI_TIMEOUT_MIN, WEB_UI_TIMEOUT_MAX, WEB_UI_TIMEOUT_DISABLED] {
        check_ok!(ctx.hal().set_web_ui_timeout(secs));
        let mut read = u32::MAX;
        check_ok!(ctx.hal().get_web_ui_timeout(Some(&mut read)));
        check_eq!(read, secs);
    }

    if is_valid_web_ui_timeout(original) {
        check_ok!(ctx.hal().set_web_ui_timeout(original));
    }
    Ok(())
}

fn set_web_ui_timeout_negative(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().set_web_ui_timeout(WEB_UI_TIMEOUT_MIN.saturating_sub(1)));
    check_err!(ctx.hal().set_web_ui_timeout(WEB_UI_TIMEOUT_MAX.saturating_add(1)));
    Ok(())
}

fn get_web_access_level_positive(ctx: &mut TestContext<'_>) -> TestResult {
    for &user in WEB_ACCESS_USERS {
        for &interface in WEB_ACCESS_INTERFACES {
            let mut level = u32::MAX;
            check_ok!(ctx.hal().get_web_access_level(user, interface, Some(&mut level)));
            check!(
                level <= WEB_ACCESS_LEVEL_MAX,
                "user {user} on interface {interface}: access level {level} out of range"
            );
        }
    }
    Ok(())
}

fn get_web_access_level_negative(ctx: &mut TestContext<'_>) -> TestResult {
    let mut level = 0;
    check_err!(ctx.hal().get_web_access_level(1, 1, None));
    check_err!(ctx.hal().get_web_access_level(0, 1, Some(&mut level)));
    check_err!(ctx.hal().get_web_access_level(1, 3, Some(&mut level)));
    Ok(())
}

fn set_web_access_level_positive(ctx: &mut TestContext<'_>) -> TestResult {
    let (user, interface) = (2, 16);
    let mut original = 0;
    check_ok!(ctx.hal().get_web_access_level(user, interface, Some(&mut original)));

    for level in [0, 1, WEB_ACCESS_LEVEL_MAX] {
        check_ok!(ctx.hal().set_web_access_level(user, interface, level));
        let mut read = u32::MAX;
        check_ok!(ctx.hal().get_web_access_level(user, interface, Some(&mut read)));
        check_eq!(read, level);
    }

    if original <= WEB_ACCESS_LEVEL_MAX {
        check_ok!(ctx.hal().set_web_access_level(user, interface, original));
    }
    Ok(())
}

fn set_web_access_level_negative(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().set_web_access_level(1, 1, WEB_ACCESS_LEVEL_MAX.saturating_add(1)));
    check_err!(ctx.hal().set_web_access_level(4, 1, 1));
    check_err!(ctx.hal().set_web_access_level(1, 0, 1));
    Ok(())
}

fn set_snmp_onboard_reboot_enable_positive(ctx: &mut TestContext<'_>) -> TestResult {
    for &value in SNMP_ONBOARD_REBOOT_VALUES {
        check_ok!(ctx.hal().set_snmp_onboard_reboot_enable(Some(value)));
    }
    Ok(())
}

fn set_snmp_onboard_reboot_enable_negative(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().set_snmp_onboard_reboot_enable(None));
    check_err!(ctx.hal().set_snmp_onboard_reboot_enable(Some("")));
    check_err!(ctx.hal().set_snmp_onboard_reboot_enable(Some("maybe")));
    Ok(())
}

fn set_device_code_image_timeout_positive(ctx: &mut TestContext<'_>) -> TestResult {
    for secs in [0, 3_600, DCI_TIMEOUT_MAX] {
        check_ok!(ctx.hal().set_device_code_image_timeout(secs));
    }
    Ok(())
}

fn set_device_code_image_timeout_negative(ctx: &mut TestContext<'_>) -> TestResult {
    check_err!(ctx.hal().set_device_code_image_timeout(-1));
    check_err!(ctx.hal().set_device_code_image_timeout(DCI_TIMEOUT_MAX.saturating_add(1)));
    Ok(())
}

fn set_device_code_image_valid_positive(ctx: &mut TestContext<'_>) -> TestResult {
    check_ok!(ctx.hal().set_device_code_image_valid(false));
    check_ok!(ctx.hal().set_device_code_image_valid(true));
    Ok(())
}
